use tracing_subscriber::EnvFilter;

/// Workspace crate prefixes that receive log output.
const CRATE_TARGETS: &[&str] = &[
    "demeter",
    "demeter_calendar",
    "demeter_dimension",
    "demeter_io",
    "demeter_mock",
];

/// Initialize tracing from the CLI verbosity count: warnings only by
/// default, `-v` info, `-vv` debug, `-vvv` trace. A set `RUST_LOG`
/// environment variable takes precedence over the flag.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives: Vec<String> = CRATE_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect();
        EnvFilter::new(directives.join(","))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
