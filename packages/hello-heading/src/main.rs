#[cfg(target_family = "wasm")]
fn main() {
    use heading::web::{init_logger, BrowserDocument};

    console_error_panic_hook::set_once();
    init_logger(log::LevelFilter::Info).expect("no logger installed yet");

    let document = BrowserDocument::new();
    match hello_heading::app::bootstrap(&document) {
        Ok(node) => std::mem::forget(node),
        Err(err) => {
            log::error!("{err}");
            panic!("{err}");
        }
    }
}

#[cfg(not(target_family = "wasm"))]
fn main() {
    match hello_heading::app::render_page() {
        Ok(html) => println!("{html}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
