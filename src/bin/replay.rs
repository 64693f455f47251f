//! 会话回放
//!
//! 载入保存的会话，跳转到指定时间（或模拟实时播放），输出显示列表。

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use xboard_rs::Whiteboard;
use xboard_rs::config::WhiteboardConfig;
use xboard_rs::script::advance_to;
use xboard_rs::store::{DirStore, SessionId};
use xboard_rs::surface::DisplayList;
use xboard_rs::time::{ManualClock, Millis, format_clock};

#[derive(Debug, Parser)]
#[command(name = "replay", about = "Replay a saved whiteboard session")]
struct Args {
    /// Encoded session blob file
    #[arg(long)]
    session: Option<PathBuf>,

    /// Directory store to restore from (requires --id)
    #[arg(long)]
    store_dir: Option<PathBuf>,

    /// Session id inside --store-dir
    #[arg(long)]
    id: Option<String>,

    /// Seek to this time (ms); defaults to the end of the recording
    #[arg(long)]
    at_ms: Option<u64>,

    /// Play back in simulated real time from --at-ms (or from the start)
    #[arg(long)]
    play: bool,

    /// Output display list JSON
    #[arg(long)]
    out_json: Option<PathBuf>,

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
    let surface = DisplayList::new(config.line_width);
    let mut wb = Whiteboard::new(surface, ManualClock::new(Millis::ZERO), config);

    let loaded = match (&args.store_dir, &args.id, &args.session) {
        (Some(dir), Some(id), _) => SessionId::parse(id)
            .and_then(|id| wb.restore(&DirStore::new(dir), &id)),
        (_, _, Some(path)) => {
            let blob = fs::read_to_string(path).expect("read session blob");
            wb.deserialize(&blob)
        }
        _ => {
            eprintln!("either --session or --store-dir with --id is required");
            std::process::exit(2);
        }
    };
    if let Err(e) = loaded {
        eprintln!("failed to load session: {e}");
        std::process::exit(1);
    }

    let end = wb.recording_elapsed();
    println!(
        "loaded events={} recording_ms={} ({}) stroke_color={}",
        wb.events().len(),
        end.0,
        format_clock(end),
        wb.stroke_color()
    );

    if args.play {
        if let Some(at) = args.at_ms {
            wb.jump(Millis(at));
        }
        wb.play();
        let mut last = None;
        while wb.is_playing() {
            let Some(due) = wb.scheduler().next_due() else {
                break;
            };
            advance_to(&mut wb, due);
            let clock = wb.playback_clock();
            if last != Some(clock) {
                println!(
                    "clock {} ({}) cursor={}",
                    clock.0,
                    format_clock(clock),
                    wb.cursor()
                );
                last = Some(clock);
            }
        }
    } else {
        wb.jump(Millis(args.at_ms.unwrap_or(u64::MAX)));
    }

    println!(
        "at_ms={} cursor={} lines={} ops={}",
        wb.playback_clock().0,
        wb.cursor(),
        wb.surface().line_count(),
        wb.surface().ops().len()
    );

    if let Some(path) = args.out_json {
        let json = serde_json::to_string_pretty(wb.surface().ops()).expect("serialize display list");
        fs::write(&path, json).expect("write display list json");
        eprintln!("wrote display list to {}", path.display());
    }
}
