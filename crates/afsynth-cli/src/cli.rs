use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

fn freq_arg(id: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .num_args(1)
        .value_name("HZ")
        .value_parser(value_parser!(f64))
        .help(help)
}

fn db_arg(id: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .num_args(1)
        .value_name("DB")
        .value_parser(value_parser!(f64))
        .help(help)
}

fn coeff_arg(id: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .num_args(1)
        .value_name("C0,C1,...")
        .value_delimiter(',')
        .allow_negative_numbers(true)
        .value_parser(value_parser!(f64))
        .help(help)
}

pub fn app() -> Command {
    Command::new("afsynth")
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .num_args(1)
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Job file to load instead of searching AFSYNTH_CONFIG, ./afsynth.yaml, ..."),
        )
        .arg(
            Arg::new("preset")
                .long("preset")
                .num_args(1)
                .value_name("NAME")
                .help("Use a named filter from the job file's presets section"),
        )
        .arg(
            Arg::new("type")
                .long("type")
                .short('t')
                .num_args(1)
                .value_name("TYPE")
                .help("Filter type: lowpass, highpass, bandpass, bandstop"),
        )
        .arg(
            Arg::new("approx")
                .long("approx")
                .short('a')
                .num_args(1)
                .value_name("FAMILY")
                .help("Approximation: butterworth, chebyshev, invchebyshev, cauer, bessel, user"),
        )
        .arg(db_arg("ripple", "ripple", "Passband ripple Rp in dB (Chebyshev, Cauer)"))
        .arg(db_arg(
            "edge-atten",
            "edge-atten",
            "Attenuation Ap at the passband edge in dB (Butterworth)",
        ))
        .arg(db_arg("atten", "atten", "Minimum stopband attenuation As in dB"))
        .arg(freq_arg("fc", "fc", "Passband edge for lowpass/highpass"))
        .arg(freq_arg("fs", "fs", "Stopband edge for lowpass/highpass"))
        .arg(freq_arg("fl", "fl", "Lower band edge for bandpass/bandstop"))
        .arg(freq_arg("fu", "fu", "Upper band edge for bandpass/bandstop"))
        .arg(freq_arg("tw", "tw", "Transition width beyond each band edge"))
        .arg(
            Arg::new("gain")
                .long("gain")
                .num_args(1)
                .value_name("K")
                .value_parser(value_parser!(f64))
                .help("Linear passband gain"),
        )
        .arg(
            Arg::new("order")
                .long("order")
                .short('n')
                .num_args(1)
                .value_name("N")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i32))
                .help("Filter order (Bessel)"),
        )
        .arg(coeff_arg(
            "num",
            "num",
            "User transfer function numerator, ascending powers of s",
        ))
        .arg(coeff_arg(
            "den",
            "den",
            "User transfer function denominator, ascending powers of s",
        ))
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .num_args(1)
                .value_name("FORMAT")
                .value_parser(["text", "yaml", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("compare")
                .long("compare")
                .help("Report the order every magnitude-specified family needs for this spec")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("example-config")
                .long("example-config")
                .help("Print an example job file and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .num_args(1)
                .value_name("LEVEL")
                .value_parser(["trace", "debug", "info", "warn", "error"])
                .help("Sets the log level, overriding the job file and RUST_LOG"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .help("Sets the log level to debug (-vv for trace), overriding the job file and RUST_LOG")
                .action(ArgAction::Count),
        )
}
