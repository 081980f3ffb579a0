use clap::Parser;
use metric_toolbox::app::{self, Cli};
use tracing_subscriber::EnvFilter;

/// 프로그램의 엔트리 포인트. 로깅을 초기화한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = app::run(Cli::parse()) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}
