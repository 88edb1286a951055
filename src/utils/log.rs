pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // log lines share the terminal with menu output, so keep them lean.
        .without_time()
        .init();
}
