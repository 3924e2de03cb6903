use log::error;

fn main() {
    if let Err(err) = ez_tracer::run() {
        error!("{}", err);
        std::process::exit(1);
    }
}
