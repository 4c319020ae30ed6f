#[derive(Debug, clap::Args)]
pub struct Config {
    /// Sample curves at double density, as for print output.
    #[clap(long)]
    pub print_mode: bool,

    /// Jitter radius added to every plotted dot position.
    #[clap(long, default_value_t = 2.0)]
    pub spread: f64,

    /// Named pencil color from the bundled palette.
    #[clap(long, default_value = "graphite")]
    pub color: String,
}
