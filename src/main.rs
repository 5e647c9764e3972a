#![deny(clippy::all)]
#![forbid(unsafe_code)]

// FIXME: When derive_builder supports Rust 2018 syntax switch to a local import
#[macro_use]
extern crate derive_builder;

use std::error::Error;
use std::io::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

use structopt::StructOpt;

mod contact;
mod content;
mod debounce;
mod directory;
mod error;
mod finder;
mod geo;
mod links;
mod render;
mod uniform;
mod view;

use contact::ContactMessageBuilder;
use directory::DIRECTORY;
use finder::{Finder, FinderConfigBuilder};
use geo::{FixedPosition, LatLon, NoProvider, PositionRequest, PositionSource};
use view::{bring_into_view, CardArena, Layout, ListViewport, ScrollCommand};

static SECTION_SEPARATOR: &str =
    "\n================================================================\n\n";

#[derive(StructOpt)]
struct Args {
    #[structopt(short = "n", long = "near")]
    near: Option<String>,
    #[structopt(short = "s", long = "search")]
    search: Option<String>,
    #[structopt(
        short = "l",
        long = "layout",
        default_value = "list",
        parse(try_from_str)
    )]
    layout: Layout,
    #[structopt(long = "uniforms")]
    uniforms: bool,
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output: Option<PathBuf>,
    #[structopt(long = "contact-name")]
    contact_name: Option<String>,
    #[structopt(long = "contact-email")]
    contact_email: Option<String>,
    #[structopt(long = "contact-phone")]
    contact_phone: Option<String>,
    #[structopt(long = "contact-message")]
    contact_message: Option<String>,
}

impl Args {
    fn wants_contact(&self) -> bool {
        self.contact_name.is_some()
            || self.contact_email.is_some()
            || self.contact_phone.is_some()
            || self.contact_message.is_some()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::from_args();

    if args.uniforms {
        println!("Rendering uniform standards page...");
        return emit(&render::uniforms_page(), args.output);
    }

    if args.wants_contact() {
        return send_contact(&args);
    }

    let config = FinderConfigBuilder::default().build()?;
    let mut finder = Finder::new(&DIRECTORY, config)?;
    let t0 = Instant::now();

    if let Some(term) = &args.search {
        finder.keystroke(term, t0);
    }

    println!("Locating visitor...");
    let request = PositionRequest {
        timeout: config.position_timeout,
        high_accuracy: false,
    };
    let outcome = match &args.near {
        Some(raw) => FixedPosition(LatLon::from_arg(raw)?).current_position(&request),
        None => NoProvider.current_position(&request),
    };
    if let Err(e) = &outcome {
        // Silent for the visitor; the operator still gets a note.
        println!("WARN: no position fix ({}), keeping the default unit", e);
    }
    finder.position_resolved(outcome, t0);

    // Let the search quiet period and the scroll delay elapse.
    let settled = t0 + config.debounce + config.scroll_delay;
    let scroll = finder.poll(settled);

    println!("Selected unit: {}", finder.selected().name);

    let mut arena = CardArena::new();
    let mut page = String::new();
    page += &render::units_section(&finder, &mut arena);
    page += SECTION_SEPARATOR;
    page += &render::selected_section(finder.selected());
    page += SECTION_SEPARATOR;
    page += &render::faq_section();
    page += SECTION_SEPARATOR;
    page += &render::footer_section();

    if let Some(intent) = scroll {
        let viewport = ListViewport {
            height: render::LIST_VIEWPORT_HEIGHT,
            scroll_top: 0.0,
        };
        match bring_into_view(intent, args.layout, &arena, viewport) {
            Some(ScrollCommand::VerticalTo(offset)) => {
                println!("Scrolling unit list to {:.0}px", offset)
            }
            Some(ScrollCommand::CenterHorizontal(id)) => {
                let name = directory::by_id(id).map(|u| u.name).unwrap_or("?");
                println!("Centering {} in the strip", name)
            }
            // Card filtered out by the active search; nothing to do.
            None => (),
        }
    }

    emit(&page, args.output)
}

fn send_contact(args: &Args) -> Result<(), Box<dyn Error>> {
    let message = ContactMessageBuilder::default()
        .name(args.contact_name.clone().unwrap_or_default())
        .email(args.contact_email.clone().unwrap_or_default())
        .phone(args.contact_phone.clone().unwrap_or_default())
        .message(args.contact_message.clone().unwrap_or_default())
        .build()?;

    match message.submit() {
        Ok(()) => {
            println!("Mensagem Enviada! Entraremos em contato em breve.");
        }
        Err(errors) => {
            for e in errors {
                println!("{}: {}", e.field.label(), e.message);
            }
        }
    }
    Ok(())
}

fn emit(page: &str, output: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    match output {
        Some(path) => {
            println!("Writing page output...");
            let mut file = std::fs::File::create(path)?;
            file.write_all(page.as_bytes())?;
        }
        None => print!("{}", page),
    }
    Ok(())
}
