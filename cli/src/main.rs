mod wav;

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use std::path::{Path, PathBuf};
use tritone_core::{sanitize_text, DecodeMethod, Decoder, Encoder, SYMBOL_SAMPLES};

#[derive(Parser)]
#[command(name = "tritone")]
#[command(about = "Encode text as multi-tone audio and decode it back")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Method {
    /// FFT peak picking
    Spectral,
    /// Resonant filter bank
    FilterBank,
    /// Run both detectors and print each result
    Both,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text to a WAV audio file
    Encode {
        /// Output WAV file
        #[arg(value_name = "OUTPUT.WAV")]
        output: PathBuf,

        /// Text to encode
        #[arg(short, long, required_unless_present = "input_file", conflicts_with = "input_file")]
        text: Option<String>,

        /// Read the text to encode from a file
        #[arg(short = 'f', long, value_name = "INPUT.TXT")]
        input_file: Option<PathBuf>,

        /// Per-tone amplitude
        #[arg(short, long, default_value_t = tritone_core::DEFAULT_AMPLITUDE)]
        amplitude: f32,
    },

    /// Decode a WAV audio file to text
    Decode {
        /// Input WAV file
        #[arg(value_name = "INPUT.WAV")]
        input: PathBuf,

        /// Detection method
        #[arg(short, long, value_enum, default_value_t = Method::Both)]
        method: Method,
    },

    /// Print spectral peaks and filter bank responses for every block
    Inspect {
        /// Input WAV file
        #[arg(value_name = "INPUT.WAV")]
        input: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { output, text, input_file, amplitude } => {
            let text = match (text, input_file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(path)?,
                (None, None) => return Err("No text to encode".into()),
            };
            encode_command(&text, &output, amplitude)?
        }
        Commands::Decode { input, method } => decode_command(&input, method)?,
        Commands::Inspect { input } => inspect_command(&input)?,
    }

    Ok(())
}

fn encode_command(text: &str, output_path: &Path, amplitude: f32) -> Result<(), Box<dyn std::error::Error>> {
    let encoder = Encoder::with_amplitude(amplitude)?;
    let sanitized = sanitize_text(text);
    if sanitized.is_empty() {
        info!("Nothing to encode after removing unsupported characters");
    }

    let samples = encoder.encode(&sanitized);
    println!(
        "Encoded {} symbols to {} audio samples",
        sanitized.chars().count(),
        samples.len()
    );

    wav::write_wav(output_path, &samples)?;
    println!("Wrote {}", output_path.display());
    Ok(())
}

fn decode_command(input_path: &Path, method: Method) -> Result<(), Box<dyn std::error::Error>> {
    let samples = wav::read_wav(input_path)?;
    info!(
        "{} samples, {} complete blocks",
        samples.len(),
        samples.len() / SYMBOL_SAMPLES
    );

    let decoder = Decoder::new();
    match method {
        Method::Spectral => {
            println!("Decoded (spectral): {}", decoder.decode(&samples, DecodeMethod::Spectral));
        }
        Method::FilterBank => {
            println!(
                "Decoded (filter bank): {}",
                decoder.decode(&samples, DecodeMethod::FilterBank)
            );
        }
        Method::Both => {
            let (spectral, filter_bank) = decoder.decode_both(&samples);
            println!("Decoded (spectral): {}", spectral);
            println!("Decoded (filter bank): {}", filter_bank);
        }
    }
    Ok(())
}

fn inspect_command(input_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let samples = wav::read_wav(input_path)?;
    let decoder = Decoder::new();

    for (index, chunk) in samples.chunks_exact(SYMBOL_SAMPLES).enumerate() {
        let block = tritone_core::pcm::from_pcm(chunk);
        println!("Block {}:", index);

        match decoder.spectral().peaks(&block) {
            Ok(peaks) => {
                let peaks: Vec<String> = peaks
                    .iter()
                    .map(|p| format!("{:.0} Hz ({:.3})", p.frequency, p.magnitude))
                    .collect();
                println!("  Spectral peaks: {}", peaks.join(", "));
            }
            Err(e) => println!("  Spectral peaks: {}", e),
        }

        match decoder.filter_bank().responses(&block) {
            Ok(responses) => {
                let tones: Vec<String> = responses
                    .tones
                    .iter()
                    .map(|(freq, response)| format!("{} Hz {:.3}", freq, response))
                    .collect();
                println!("  Filter bank: {}", tones.join(", "));
                println!(
                    "  Case filters: 100 Hz {:.3}, 200 Hz {:.3}",
                    responses.lower_case, responses.upper_case
                );
            }
            Err(e) => println!("  Filter bank: {}", e),
        }

        let show = |method| match decoder.decode_block(&block, method) {
            Ok(c) => format!("'{}'", c),
            Err(e) => format!("{} ({})", tritone_core::PLACEHOLDER, e),
        };
        println!(
            "  Decoded: spectral {}, filter bank {}",
            show(DecodeMethod::Spectral),
            show(DecodeMethod::FilterBank)
        );
    }

    let trailing = samples.len() % SYMBOL_SAMPLES;
    if trailing > 0 {
        println!("Ignored {} trailing samples", trailing);
    }
    Ok(())
}
