use itertools::Itertools;

use crate::content::FAQ;
use crate::directory::UnitRecord;
use crate::finder::Finder;
use crate::links;
use crate::uniform::{rashguard, Audience, Rank};
use crate::view::{CardArena, CardHandle};

/// Vertical space one card occupies in the list layout's coordinate
/// space; the arena handles are derived from it.
pub const CARD_HEIGHT: f64 = 72.0;
pub const LIST_VIEWPORT_HEIGHT: f64 = 400.0;

fn state_name(state: &str) -> &str {
    match state {
        "GO" => "Goiás",
        "MG" => "Minas Gerais",
        "MS" => "Mato Grosso do Sul",
        _ => state,
    }
}

fn unit_card(unit: &UnitRecord, selected_id: u32) -> String {
    let marker = if unit.id == selected_id { '>' } else { ' ' };
    let badge = if unit.featured { " [MATRIZ]" } else { "" };
    format!(
        "{} {:2}. {}{}\n       {} | {} | {}\n",
        marker, unit.id, unit.name, badge, unit.address, unit.phone, unit.latlon
    )
}

/// The directory section. Cards are laid out top to bottom and their
/// geometry registered in the arena, so a scroll request issued later
/// can be resolved against what was actually rendered.
pub fn units_section(finder: &Finder, arena: &mut CardArena) -> String {
    let visible = finder.visible();
    let selected_id = finder.selected().id;

    let mut out = String::from("ENCONTRE SUA ESCOLA\n");
    if !finder.search_term().is_empty() {
        out += &format!("Busca: \"{}\"\n", finder.search_term());
    }

    if visible.is_empty() {
        out += "\nNenhuma unidade encontrada.\n";
        return out;
    }

    arena.clear();
    for (i, unit) in visible.iter().enumerate() {
        arena.place(
            unit.id,
            CardHandle {
                top: i as f64 * CARD_HEIGHT,
                height: CARD_HEIGHT,
            },
        );
    }

    for (state, group) in &visible.iter().group_by(|u| u.state) {
        out += &format!("\n-- {}\n", state_name(state));
        for unit in group {
            out += &unit_card(unit, selected_id);
        }
    }
    out
}

pub fn selected_section(unit: &UnitRecord) -> String {
    let mut out = String::new();
    out += &format!("UNIDADE SELECIONADA: {}\n", unit.name);
    out += &format!("{} - {}\n", unit.city, unit.state);
    out += &format!("{}\n", unit.address);
    out += &format!("Telefone: {}\n", links::tel_uri(unit.phone));
    out += &format!("Rota:     {}\n", links::directions_url(unit.map_query));
    out += &format!("Mapa:     {}\n", links::embed_map_url(unit.map_query));
    out
}

pub fn faq_section() -> String {
    let mut out = String::from("DÚVIDAS FREQUENTES\n");
    for (i, entry) in FAQ.iter().enumerate() {
        out += &format!("\n{}. {}\n   {}\n", i + 1, entry.question, entry.answer);
    }
    out
}

pub fn footer_section() -> String {
    format!("Fale conosco: {}\n", links::WHATSAPP_URI)
}

/// The secondary page: the team's uniform standards.
pub fn uniforms_page() -> String {
    let mut out = String::from("PADRÃO DE EXCELÊNCIA\nGuia oficial de uniformização da USGO.\n");

    out += "\n-- Faixas\n";
    for rank in &Rank::ALL {
        let lettering = if rank.dark() { "clara" } else { "escura" };
        out += &format!("{:14} {}  letra {}\n", rank.name(), rank.hex(), lettering);
    }

    out += "\n-- Rashguards\n";
    for audience in &[Audience::Adult, Audience::Kids] {
        let r = rashguard(*audience);
        out += &format!("[{}] {}: {} / {}\n", r.badge, r.title, r.specs[0], r.specs[1]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::DIRECTORY;
    use crate::finder::FinderConfigBuilder;
    use std::time::{Duration, Instant};

    fn finder() -> Finder<'static> {
        let config = FinderConfigBuilder::default().build().unwrap();
        Finder::new(&DIRECTORY, config).unwrap()
    }

    #[test]
    fn full_directory_renders_every_card_and_region() {
        let mut arena = CardArena::new();
        let section = units_section(&finder(), &mut arena);

        assert_eq!(arena.len(), DIRECTORY.len());
        assert!(section.contains("-- Goiás"));
        assert!(section.contains("-- Minas Gerais"));
        assert!(section.contains("-- Mato Grosso do Sul"));
        assert!(section.contains("[MATRIZ]"));
        // The default selection is marked
        assert!(section.contains(">  1. USGO Itumbiara - Centro"));
    }

    #[test]
    fn empty_result_renders_the_no_results_state() {
        let mut f = finder();
        let t0 = Instant::now();
        f.keystroke("zzzz", t0);
        f.poll(t0 + Duration::from_secs(1));

        let mut arena = CardArena::new();
        let section = units_section(&f, &mut arena);
        assert!(section.contains("Nenhuma unidade encontrada."));
        assert!(arena.is_empty());
    }

    #[test]
    fn filtered_render_registers_only_visible_cards() {
        let mut f = finder();
        let t0 = Instant::now();
        f.keystroke("uberl", t0);
        f.poll(t0 + Duration::from_secs(1));

        let mut arena = CardArena::new();
        units_section(&f, &mut arena);
        assert_eq!(arena.len(), 2);
        assert!(arena.get(19).is_some());
        assert!(arena.get(1).is_none());
        // Cards stack top to bottom
        assert_eq!(arena.get(19).map(|h| h.top), Some(0.0));
        assert_eq!(arena.get(20).map(|h| h.top), Some(CARD_HEIGHT));
    }

    #[test]
    fn selected_section_carries_all_outbound_links() {
        let section = selected_section(&DIRECTORY[0]);
        assert!(section.contains("tel:(64) 99999-9999"));
        assert!(section.contains("https://www.google.com/maps/search/"));
        assert!(section.contains("&output=embed"));
    }

    #[test]
    fn uniforms_page_lists_all_ranks() {
        let page = uniforms_page();
        for rank in &Rank::ALL {
            assert!(page.contains(rank.name()));
            assert!(page.contains(rank.hex()));
        }
        assert!(page.contains("Rashguard Ranked Pro"));
        assert!(page.contains("Rashguard Young"));
    }
}
