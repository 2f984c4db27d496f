use env_logger::Builder;
use log::LevelFilter;

/// Initialize the logger at `level`; `RUST_LOG` directives override it.
pub fn init_logger(level: LevelFilter) {
    builder(level, std::env::var("RUST_LOG").ok().as_deref()).init();
}

fn builder(level: LevelFilter, directives: Option<&str>) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(level);
    if let Some(directives) = directives {
        builder.parse_filters(directives);
    }
    builder
}
