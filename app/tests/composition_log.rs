use app::pages::home::Index;
use leptos::prelude::*;
use std::sync::Mutex;

struct Capture {
    lines: Mutex<Vec<String>>,
}

impl log::Log for Capture {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if record.target().starts_with("app") {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn rendering_the_page_logs_each_composed_section() {
    log::set_logger(&CAPTURE).expect("a logger is already installed");
    log::set_max_level(log::LevelFilter::Trace);

    let owner = Owner::new();
    owner.with(|| view! { <Index /> }.to_html());

    let lines = CAPTURE.lines.lock().expect("poisoned").clone();
    let composed: Vec<&String> = lines.iter().filter(|line| line.starts_with("composed")).collect();
    // nav, skills, projects and footer icons.
    assert_eq!(4, composed.len(), "{lines:?}");
    assert!(composed.contains(&&String::from("composed 8 blocks")));
    assert!(composed.contains(&&String::from("composed 3 blocks")));
}
