use anyhow::{anyhow, bail, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{info, warn};
use q16_fft::harness::{
    compare_results, complex_tone, describe_bin, read_f32_dump, read_results, save_results,
    write_report, write_twiddle_asm, TwiddlePart,
};
use q16_fft::{generate_twiddles, transform, ComplexFixed, FftError};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

const DEFAULT_DUMPS: [&str; 2] = ["bitreversalout.hex", "finalout.hex"];

fn size_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("size")
        .long("size")
        .short("n")
        .takes_value(true)
        .default_value("1024")
        .help("FFT size (power of two)")
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = App::new("q16-fft")
        .about("Radix-2 FFT in Q16.16 fixed-point arithmetic")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("run")
                .about("Transforms a complex tone and saves the bins for comparison")
                .arg(size_arg())
                .arg(
                    Arg::with_name("freq")
                        .long("freq")
                        .short("f")
                        .takes_value(true)
                        .default_value("100")
                        .help("Bin of the input tone"),
                )
                .arg(
                    Arg::with_name("output")
                        .long("output")
                        .short("o")
                        .takes_value(true)
                        .default_value("fft_results.txt")
                        .help("Results file"),
                )
                .arg(Arg::with_name("no-save").long("no-save").help("Do not write the results file")),
        )
        .subcommand(
            SubCommand::with_name("twiddles")
                .about("Writes twiddle_real.s and twiddle_imag.s for the assembly implementation")
                .arg(size_arg())
                .arg(
                    Arg::with_name("dir")
                        .long("dir")
                        .takes_value(true)
                        .default_value(".")
                        .help("Output directory"),
                ),
        )
        .subcommand(
            SubCommand::with_name("dump")
                .about("Prints little-endian f32 complex dumps from the simulator")
                .arg(Arg::with_name("files").multiple(true).help("Dump files")),
        )
        .subcommand(
            SubCommand::with_name("compare")
                .about("Compares two results files bin by bin")
                .arg(Arg::with_name("expected").required(true))
                .arg(Arg::with_name("actual").required(true)),
        )
        .get_matches();

    match matches.subcommand() {
        ("run", Some(m)) => run(m),
        ("twiddles", Some(m)) => twiddles(m),
        ("dump", Some(m)) => dump(m),
        ("compare", Some(m)) => compare(m),
        (other, _) => bail!("unknown subcommand '{}'", other),
    }
}

fn parse_arg<T>(m: &ArgMatches, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = m
        .value_of(name)
        .with_context(|| format!("missing --{}", name))?;
    raw.parse()
        .map_err(|e| anyhow!("invalid --{} '{}': {}", name, raw, e))
}

fn run(m: &ArgMatches) -> Result<()> {
    let n: usize = parse_arg(m, "size")?;
    let freq: usize = parse_arg(m, "freq")?;

    let (x_re, x_im) = complex_tone(n, freq);

    println!("\nComputing {}-point FFT with Q16.16 fixed-point arithmetic", n);
    let start = Instant::now();
    let (y_re, y_im) = transform(&x_re, &x_im, n)?;
    let elapsed = start.elapsed();

    if !m.is_present("no-save") {
        let path = m.value_of("output").unwrap_or("fft_results.txt");
        save_results(path, &y_re, &y_im).with_context(|| format!("failed to write '{}'", path))?;
    }

    let magnitude = |i: usize| ComplexFixed::new(y_re[i], y_im[i]).to_complex64().norm_sqr();
    if let Some(peak) = (0..n).max_by(|&a, &b| magnitude(a).total_cmp(&magnitude(b))) {
        info!("peak at bin {}: {}", peak, describe_bin(y_re[peak], y_im[peak]));
    }

    println!();
    write_report(io::stdout().lock(), (&x_re, &x_im), (&y_re, &y_im), elapsed)?;
    Ok(())
}

fn twiddles(m: &ArgMatches) -> Result<()> {
    let n: usize = parse_arg(m, "size")?;
    if !n.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo.into());
    }
    let dir = Path::new(m.value_of("dir").unwrap_or("."));

    let table = generate_twiddles(n)?;
    for part in [TwiddlePart::Real, TwiddlePart::Imag] {
        let path = dir.join(format!("{}.s", part.label()));
        let file =
            File::create(&path).with_context(|| format!("failed to create '{}'", path.display()))?;
        write_twiddle_asm(BufWriter::new(file), &table, part)?;
        info!("wrote {}", path.display());
    }
    Ok(())
}

fn dump(m: &ArgMatches) -> Result<()> {
    let files: Vec<&str> = match m.values_of("files") {
        Some(values) => values.collect(),
        None => DEFAULT_DUMPS.to_vec(),
    };

    for name in files {
        let file = match File::open(name) {
            Ok(file) => file,
            Err(e) => {
                warn!("cannot open '{}': {}", name, e);
                continue;
            }
        };
        let values = read_f32_dump(BufReader::new(file))
            .with_context(|| format!("failed to read '{}'", name))?;

        println!("\nContents of {}:", name);
        for (i, v) in values.iter().enumerate() {
            println!("  [{:2}] = {:.6} + {:.6}j", i, v.re, v.im);
        }
    }
    Ok(())
}

fn load_results(path: &str) -> Result<(Vec<i32>, Vec<i32>)> {
    let file = File::open(path).with_context(|| format!("failed to open '{}'", path))?;
    read_results(BufReader::new(file)).with_context(|| format!("failed to parse '{}'", path))
}

fn compare(m: &ArgMatches) -> Result<()> {
    let expected_path = m.value_of("expected").context("missing expected file")?;
    let actual_path = m.value_of("actual").context("missing actual file")?;

    let expected = load_results(expected_path)?;
    let actual = load_results(actual_path)?;

    let cmp = compare_results(
        (&expected.0[..], &expected.1[..]),
        (&actual.0[..], &actual.1[..]),
    )
    .with_context(|| {
        format!(
            "'{}' has {} bins, '{}' has {}",
            expected_path,
            expected.0.len(),
            actual_path,
            actual.0.len()
        )
    })?;

    println!("{}", cmp);
    if !cmp.is_identical() {
        bail!("results differ");
    }
    Ok(())
}
