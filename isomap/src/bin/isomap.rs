use clap::Parser;
use isomap::app::IsomapApp;

fn main() {
    env_logger::init();
    let args = IsomapApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("isomap failed: {e}");
        std::process::exit(1);
    }
}
