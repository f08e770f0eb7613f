use std::io::{BufWriter, Write};
use std::path::PathBuf;

use adjgen_core::{GenerationConfig, Termination, WordGenerator};
use anyhow::{Context, Result};
use clap::Parser;

/// `--sweep` で試す温度
const SWEEP_TEMPERATURES: [f32; 4] = [0.5, 0.8, 1.0, 1.3];

#[derive(Parser, Debug)]
#[command(author, version, about = "組み込みモデルで形容詞を生成して1行ずつ出力する")]
struct Cli {
    /// 生成する語数（スイープ時は温度ごと）
    #[arg(short = 'n', long, default_value_t = 20)]
    count: usize,

    /// 温度（設定ファイルより優先）
    #[arg(short, long)]
    temperature: Option<f32>,

    /// デコードのステップ上限（設定ファイルより優先）
    #[arg(long)]
    max_steps: Option<usize>,

    /// 乱数シード（設定ファイルより優先）
    #[arg(long)]
    seed: Option<u64>,

    /// 生成設定の TOML ファイル
    #[arg(long)]
    config: Option<PathBuf>,

    /// 複数の温度で生成して比較する
    #[arg(long)]
    sweep: bool,

    /// 終了理由とステップ数も出力する
    #[arg(long)]
    verbose: bool,

    /// ログレベル（RUST_LOG 未指定時）
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn load_config(cli: &Cli) -> Result<GenerationConfig> {
    let mut config = match &cli.config {
        Some(path) => GenerationConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => GenerationConfig::default(),
    };
    if let Some(t) = cli.temperature {
        config.temperature = t;
    }
    if let Some(steps) = cli.max_steps {
        config.max_steps = steps;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate()?;
    Ok(config)
}

fn write_words<W: Write>(
    out: &mut W,
    generator: &mut WordGenerator,
    count: usize,
    verbose: bool,
) -> Result<()> {
    let mut truncated = 0usize;
    for _ in 0..count {
        let word = generator.generate_word();
        if word.termination == Termination::StepBudget {
            truncated += 1;
        }
        if verbose {
            writeln!(out, "{}\t{}\t{}", word.text, word.termination, word.steps)?;
        } else {
            writeln!(out, "{}", word.text)?;
        }
    }
    log::info!("{count} words, {truncated} truncated by step budget");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tools::init_logger(&cli.log_level);

    let config = load_config(&cli)?;
    log::debug!("generation config: {config:?}");

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut generator = WordGenerator::new(config);

    if cli.sweep {
        for (i, &temperature) in SWEEP_TEMPERATURES.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "# temperature = {temperature}")?;
            generator.set_temperature(temperature);
            write_words(&mut out, &mut generator, cli.count, cli.verbose)?;
        }
    } else {
        write_words(&mut out, &mut generator, cli.count, cli.verbose)?;
    }
    out.flush()?;

    #[cfg(feature = "sampler-stats")]
    adjgen_core::stats::get_sampler_stats().print_report();

    Ok(())
}
