//! Cessionpro drafts entry point
//!
//! On the web the library is driven from JS through `DraftAutosave`; this
//! only installs logging. Natively it runs a short autosave walkthrough
//! against an in-memory store.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        return;
    }
    log::info!("Cessionpro drafts ready");
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Cessionpro drafts (native) starting...");
    log::info!("Browser hosts use the wasm build - run with `trunk serve` for the web version");

    demo_autosave();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_autosave() {
    use std::rc::Rc;
    use std::thread::sleep;
    use std::time::Duration;

    use cessionpro_drafts::growth::{format_growth, growth_percentage};
    use cessionpro_drafts::{AutosaveConfig, DraftManager, MemoryStore, SystemClock};

    let store = Rc::new(MemoryStore::new());
    let config = AutosaveConfig {
        interval_ms: 200,
        ..AutosaveConfig::load(&*store)
    };
    let key = config.key_for("listing");
    let mut drafts = DraftManager::with_config(Rc::clone(&store), SystemClock::new(), key, config);

    // Three quick edits: only the last survives the debounce
    for title in ["Boul", "Boulangerie", "Boulangerie Lyon 3e"] {
        drafts.update(serde_json::json!({ "title": title, "asking_price": 185_000 }));
        sleep(Duration::from_millis(50));
        drafts.poll();
    }
    println!("after edits: has_draft = {}", drafts.has_draft());

    sleep(Duration::from_millis(250));
    drafts.poll();
    match drafts.load_draft() {
        Some(draft) => println!("saved draft: {}", draft),
        None => println!("no draft saved"),
    }

    println!("cleared: {}", drafts.clear_draft());
    println!("has_draft after clear: {}", drafts.has_draft());

    let pct = growth_percentage(42.0, 35.0);
    println!("listing views vs last month: {}", format_growth(pct));
}
