use std::io::Write;
use std::path::PathBuf;

use adjgen_core::{WordGenerator, seeded_rng};
use anyhow::Result;
use clap::Parser;
use tools::typewriter::{PRESETS, Phase, Showcase, ShowcaseConfig, TerminalDisplay};

#[derive(Parser, Debug)]
#[command(author, version, about = "\"the future is...\" をタイプライター風に表示する")]
struct Cli {
    /// 乱数シード（設定ファイルより優先）
    #[arg(long)]
    seed: Option<u64>,

    /// ショーケース設定の TOML ファイル（[generation] / [typing]）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 語の表示領域の幅（桁）
    #[arg(long, default_value_t = 12)]
    width: usize,

    /// プリセット + 生成語の周回数（0 で無限）
    #[arg(long, default_value_t = 0)]
    cycles: usize,

    /// ログレベル（RUST_LOG 未指定時）
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tools::init_logger(&cli.log_level);

    let mut config = match &cli.config {
        Some(path) => ShowcaseConfig::load(path)?,
        None => ShowcaseConfig::default(),
    };
    if cli.seed.is_some() {
        config.generation.seed = cli.seed;
    }
    log::debug!("showcase config: {config:?}");

    // 打鍵間隔用と生成用で乱数列を分ける
    let mut rng = seeded_rng(config.generation.seed.map(|s| s ^ 0x5EED));
    let generator = WordGenerator::new(config.generation.clone());
    let mut showcase = Showcase::new(generator);

    let stdout = std::io::stdout();
    let mut display = TerminalDisplay::new(stdout.lock(), cli.width, config.typing.blink_clock());
    display.draw_header()?;

    let words_per_cycle = PRESETS.len() * 2;
    let mut played = 0usize;
    loop {
        let cue = showcase.play_next(&mut display, &config.typing, &mut rng)?;
        if cue.phase == Phase::Generated {
            log::info!("generated: {}", cue.text);
        }
        played += 1;
        if cli.cycles > 0 && played >= cli.cycles * words_per_cycle {
            break;
        }
    }

    drop(display);
    std::io::stdout().flush()?;
    Ok(())
}
