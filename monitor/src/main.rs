mod app;
mod session;

#[tokio::main]
async fn main() {
    if let Err(err) = app::run().await {
        eprintln!("error: {err:#}");
        eprintln!("hint: restart the monitor and try again");
        std::process::exit(1);
    }
}
