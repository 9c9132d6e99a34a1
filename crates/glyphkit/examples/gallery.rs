//! Icon gallery example.
//!
//! Prints an HTML page showing every registered icon at a few sizes, then
//! walks one widget through a couple of update cycles.
//!
//! Run with: cargo run -p glyphkit --example gallery > gallery.html
//!
//! Optional arguments:
//! - a search term to filter the gallery
//! - `--json <path>` to load an extra icon dataset
//! - `--copy <name>` to copy an icon name to the system clipboard
//!
//! Set `GLYPHKIT_LOG=debug` to see binding and resolver logs on stderr.

use glyphkit::icons::IconRecord;
use glyphkit::logging::directive_for_all;
use glyphkit::platform::Clipboard;
use glyphkit::prelude::*;
use tracing_subscriber::EnvFilter;

const SIZES: [u32; 3] = [16, 24, 48];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let level = std::env::var("GLYPHKIT_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(directive_for_all(&level)))
        .init();

    let mut args = std::env::args().skip(1);
    let mut search = String::new();
    let mut copy = None;
    let mut dataset = IconDataset::builtin();
    while let Some(arg) = args.next() {
        if arg == "--json" {
            let path = args.next().ok_or("--json needs a path")?;
            let extra = IconDataset::from_file(&path)?;
            dataset.extend(extra.iter().map(|(name, svg)| IconRecord::new(name, svg)));
        } else if arg == "--copy" {
            copy = Some(args.next().ok_or("--copy needs an icon name")?);
        } else {
            search = arg;
        }
    }

    let resolver = IconResolver::from_dataset(&dataset);
    let pipe = IconPipe::new(resolver.clone());
    let browser = IconBrowser::new(resolver.clone());
    browser.set_search_term(search);

    if let Some(name) = copy {
        let mut clipboard = Clipboard::new()?;
        browser.copy_name(&name, &mut clipboard)?;
    }

    println!("<!DOCTYPE html>");
    println!("<html><head><meta charset=\"utf-8\"><title>glyphkit gallery</title></head><body>");
    println!(
        "<p>{} of {} icons</p>",
        browser.filtered_count(),
        browser.total_count()
    );
    println!("<table>");
    for name in browser.filtered_names() {
        print!("<tr><td><code>{name}</code></td>");
        for size in SIZES {
            print!("<td>{}</td>", pipe.transform(&name, size));
        }
        println!("</tr>");
    }
    println!("</table>");

    // One widget through two cycles: a name change re-resolves, a color
    // change does not.
    let icon = DynamicIcon::builder(resolver)
        .name(IconName::SEARCH)
        .size(32)
        .color("#333")
        .build();
    icon.icon_changed.connect(|markup| {
        tracing::info!(len = markup.as_str().len(), "icon changed");
    });

    icon.apply(IconInputs::new().name(IconName::MENU));
    println!("{}", icon.render_html());
    icon.apply(IconInputs::new().color("#000"));
    println!("{}", icon.render_html());
    println!(
        "<p>resolutions: {}</p></body></html>",
        icon.resolution_count()
    );

    Ok(())
}
