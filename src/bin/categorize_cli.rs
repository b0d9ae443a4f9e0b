use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use audio_categorizer::{classify, Category, ClassifierConfig, FeatureExtractor, NoiseSource};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "categorize_cli",
    about = "Statistical audio category classifier (Effects / Human / Music / Nature / Urban)"
)]
struct Cli {
    /// WAV files to classify
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Override the built-in probability tables with a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the coherence noise reference (reproducible runs)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    match run() {
        Ok(()) => ExitCode::from(0),
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ClassifierConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ClassifierConfig::default(),
    };

    let mut noise = match cli.seed {
        Some(seed) => NoiseSource::from_seed(seed),
        None => NoiseSource::from_entropy(),
    };

    for path in &cli.files {
        classify_file(path, &config, &mut noise)
            .with_context(|| format!("classifying {}", path.display()))?;
    }
    Ok(())
}

fn classify_file(path: &PathBuf, config: &ClassifierConfig, noise: &mut NoiseSource) -> Result<()> {
    let (samples, sample_rate) = load_wav_mono(path)?;

    let extract_start = Instant::now();
    let extractor = FeatureExtractor::new(sample_rate)?;
    let features = extractor.extract(&samples, noise)?;
    let extract_elapsed = extract_start.elapsed();

    let classify_start = Instant::now();
    let result = classify(&features, config);
    let classify_elapsed = classify_start.elapsed();

    println!("{} is category: {}", path.display(), result.category);
    print!("The computed scores are [");
    for (i, (category, score)) in Category::ALL.iter().zip(result.scores.iter()).enumerate() {
        if i > 0 {
            print!(", ");
        }
        print!("{}: {:.3}", category, score);
    }
    println!("]");
    println!(
        "Statistics took {:.2?}, classification took {:.2?} (total {:.2?})",
        extract_elapsed,
        classify_elapsed,
        extract_elapsed + classify_elapsed
    );
    Ok(())
}

/// Read a WAV file as mono f32 samples plus its sample rate
///
/// Multi-channel files are downmixed by averaging channels; integer
/// formats are normalized to [-1, 1].
fn load_wav_mono(path: &PathBuf) -> Result<(Vec<f32>, u32)> {
    let mut reader =
        hound::WavReader::open(path).with_context(|| format!("opening {}", path.display()))?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<_, _>>()
            .context("decoding float samples")?,
        hound::SampleFormat::Int => {
            if spec.bits_per_sample > 32 {
                bail!("unsupported bit depth: {}", spec.bits_per_sample);
            }
            let scale = (1_i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<std::result::Result<_, _>>()
                .context("decoding integer samples")?
        }
    };

    let channels = spec.channels as usize;
    if channels == 0 {
        bail!("WAV file reports zero channels");
    }
    let mono: Vec<f32> = if channels == 1 {
        interleaved
    } else {
        interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect()
    };

    Ok((mono, spec.sample_rate))
}
