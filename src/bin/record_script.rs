//! 脚本录制
//!
//! 在无界面白板上按时间执行命令脚本，并把录制结果编码保存。

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use xboard_rs::Whiteboard;
use xboard_rs::config::WhiteboardConfig;
use xboard_rs::script::{Script, run_script};
use xboard_rs::store::DirStore;
use xboard_rs::surface::DisplayList;
use xboard_rs::time::{ManualClock, Millis, format_clock};

#[derive(Debug, Parser)]
#[command(
    name = "record-script",
    about = "Run a timed command script on a headless whiteboard and save the session"
)]
struct Args {
    /// Path to script.json
    #[arg(long)]
    script: PathBuf,

    /// Write the encoded session blob to this file
    #[arg(long)]
    out: Option<PathBuf>,

    /// Also save into a directory store (<dir>/<id>.xboard)
    #[arg(long)]
    store_dir: Option<PathBuf>,

    /// Whiteboard config JSON
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path).expect("read config json");
            WhiteboardConfig::from_json_str(&raw).expect("parse config json")
        }
        None => WhiteboardConfig::default(),
    };
    let raw = fs::read_to_string(&args.script).expect("read script.json");
    let script = Script::from_json_str(&raw).expect("parse script.json");

    let surface = DisplayList::new(config.line_width);
    let mut wb = Whiteboard::new(surface, ManualClock::new(Millis::ZERO), config);
    run_script(&mut wb, &script);
    // 脚本末尾仍在录制时自动停止，保证保存的时长是冻结值
    wb.stop_recording();

    let blob = wb.serialize().expect("encode session");
    let id = wb.ensure_session_id();

    if let Some(path) = &args.out {
        fs::write(path, &blob).expect("write session blob");
        eprintln!("wrote session blob to {}", path.display());
    }
    if let Some(dir) = &args.store_dir {
        let mut store = DirStore::new(dir);
        wb.save(&mut store).expect("save session");
        eprintln!("saved session to {}", store.path_for(&id).display());
    }

    let elapsed = wb.recording_elapsed();
    println!(
        "saved id={} steps={} script_ms={} events={} recording_ms={} ({}) lines={}",
        id,
        script.steps.len(),
        script.end_ms(),
        wb.events().len(),
        elapsed.0,
        format_clock(elapsed),
        wb.surface().line_count()
    );
}
