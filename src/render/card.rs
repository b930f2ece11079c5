//! Full card text.
//!
//! Every card kind implements `Renderable`. Output is built from `{icon}`
//! placeholders and light markup only, so rendering the same card against
//! the same index always gives the same bytes.

use super::cost::cost_label;
use super::dial::dial_rows;
use super::markup::{bold, bullets, iconify, italics};
use super::restrictions::restrictions_line;
use super::stats::{pilot_trailer, ship_stats, side_trailer};
use super::text::{format_ability, icon_format, wiki_link};
use crate::cards::{
    Card, CardBase, CardIndex, Condition, Damage, Device, Pilot, Ship, ShipAbility, Side, Upgrade,
};
use crate::core::config::RenderConfig;

/// What a renderer needs besides the card itself.
#[derive(Clone, Debug)]
pub struct RenderContext<'a> {
    /// Resolves ships, conditions and names referenced by a card.
    pub index: &'a CardIndex,
    pub config: RenderConfig,
}

impl<'a> RenderContext<'a> {
    #[must_use]
    pub fn new(index: &'a CardIndex) -> Self {
        Self {
            index,
            config: RenderConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Card name linked to its wiki page.
    #[must_use]
    pub fn name_link(&self, base: &CardBase) -> String {
        wiki_link(&self.config.wiki_base, &base.name, base.tooltip())
    }

    fn faction_name(&self, xws: &str) -> String {
        self.index
            .faction(xws)
            .map_or_else(|| xws.to_string(), |faction| faction.name.clone())
    }
}

/// Turns a card into display text.
pub trait Renderable {
    fn render(&self, ctx: &RenderContext<'_>) -> String;
}

/// Collects non-empty chunks and joins them one per line.
#[derive(Default)]
struct Lines(Vec<String>);

impl Lines {
    fn push(&mut self, chunk: impl Into<String>) {
        let chunk = chunk.into();
        let chunk = chunk.trim_end_matches('\n');
        if !chunk.is_empty() {
            self.0.push(chunk.to_string());
        }
    }

    fn finish(self) -> String {
        self.0.join("\n")
    }
}

/// Name line plus restrictions: `• [name](link): *caption* [cost] [Standard]`.
fn header(base: &CardBase, prefix: &str, cost: &str, ctx: &RenderContext<'_>) -> String {
    let mut out = prefix.to_string();
    if base.limited > 0 {
        out.push_str(&bullets(base.limited));
        out.push(' ');
    }
    out.push_str(&ctx.name_link(base));
    if let Some(caption) = base.caption.as_deref().filter(|c| !c.is_empty()) {
        out.push_str(": ");
        out.push_str(&italics(caption));
    }
    out.push(' ');
    out.push_str(cost);
    let mode = base.legality.mode_tag();
    if !mode.is_empty() {
        out.push(' ');
        out.push_str(mode);
    }
    let restrictions = restrictions_line(&base.restrictions, ctx.index);
    if !restrictions.is_empty() {
        out.push('\n');
        out.push_str(&restrictions);
    }
    out
}

fn push_body(lines: &mut Lines, ability: Option<&str>, text: Option<&str>, ctx: &RenderContext<'_>) {
    if let Some(ability) = ability {
        lines.push(ctx.index.highlight_names(&format_ability(ability)).into_owned());
    }
    if let Some(text) = text {
        lines.push(italics(text));
    }
}

fn ship_ability_line(ability: &ShipAbility) -> String {
    format!("{}: {}", bold(&ability.name), icon_format(&ability.text))
}

fn push_conditions(lines: &mut Lines, conditions: &[String], ctx: &RenderContext<'_>) {
    for condition in conditions.iter().filter_map(|xws| ctx.index.condition(xws)) {
        lines.push(condition.render(ctx));
    }
}

impl Renderable for Ship {
    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let mut title = format!("{} {}", iconify(&self.base.xws), ctx.name_link(&self.base));
        if let Some(size) = &self.size {
            title.push(' ');
            title.push_str(&iconify(&format!("{}base", size.to_lowercase())));
        }

        let mut lines = Lines::default();
        lines.push(title);
        lines.push(ship_stats(self, None));
        for row in dial_rows(self) {
            lines.push(row);
        }
        lines.finish()
    }
}

impl Renderable for Pilot {
    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let ship = ctx.index.ship_of(self);
        let prefix = ship.map_or_else(String::new, |ship| format!("{} ", iconify(&ship.base.xws)));

        let mut lines = Lines::default();
        lines.push(header(&self.base, &prefix, &cost_label(&self.base.cost), ctx));
        if let Some(ship) = ship {
            lines.push(ship_stats(ship, Some(self)));
        }
        push_body(&mut lines, self.base.ability.as_deref(), self.base.text.as_deref(), ctx);
        if let Some(ability) = &self.ship_ability {
            lines.push(ship_ability_line(ability));
        }
        lines.push(self.base.keywords.join(", "));
        lines.push(pilot_trailer(self));
        push_conditions(&mut lines, &self.conditions, ctx);
        lines.finish()
    }
}

/// Header cost of an upgrade.
#[must_use]
pub fn upgrade_cost_label(upgrade: &Upgrade) -> String {
    if upgrade.standard_loadout_only {
        "[SL]".to_string()
    } else {
        cost_label(&upgrade.base.cost)
    }
}

fn render_device(device: &Device, ctx: &RenderContext<'_>) -> String {
    match device {
        Device::Remote(remote) => remote.render(ctx),
        Device::Other { name, kind, effect } => {
            let mut out = format!("{} ({kind})", bold(name));
            if let Some(effect) = effect {
                out.push(' ');
                out.push_str(&format_ability(effect));
            }
            out
        }
    }
}

fn push_side(lines: &mut Lines, upgrade: &Upgrade, index: usize, side: &Side, ctx: &RenderContext<'_>) {
    if upgrade.is_double_sided() {
        lines.push(bold(&side.title));
    }
    if index == 0 {
        lines.push(upgrade.base.keywords.join(", "));
    }
    push_body(lines, side.ability.as_deref(), side.text.as_deref(), ctx);
    if let Some(ability) = &side.ship_ability {
        lines.push(ship_ability_line(ability));
    }
    lines.push(side_trailer(side));
    if let Some(device) = &side.device {
        lines.push(render_device(device, ctx));
    }
    push_conditions(lines, &side.conditions, ctx);
}

impl Renderable for Upgrade {
    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let prefix = format!("{} ", iconify(self.slot_type()));
        let mut lines = Lines::default();
        lines.push(header(&self.base, &prefix, &upgrade_cost_label(self), ctx));
        for (index, side) in self.sides.iter().enumerate() {
            push_side(&mut lines, self, index, side, ctx);
        }
        lines.finish()
    }
}

impl Renderable for Damage {
    fn render(&self, _ctx: &RenderContext<'_>) -> String {
        let copies = "•".repeat(self.amount as usize);
        let mut lines = Lines::default();
        lines.push(format!(
            "{} {} ({}) {copies}",
            iconify("atkcrit"),
            bold(&self.base.name),
            self.deck
        ));
        if let Some(text) = &self.base.text {
            lines.push(format_ability(text));
        }
        lines.finish()
    }
}

impl Renderable for Condition {
    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let mut lines = Lines::default();
        lines.push(format!("{} • {}", iconify("condition"), bold(&self.base.name)));
        if let Some(ability) = &self.base.ability {
            lines.push(ctx.index.highlight_names(&format_ability(ability)).into_owned());
        }
        lines.finish()
    }
}

impl Renderable for Card {
    fn render(&self, ctx: &RenderContext<'_>) -> String {
        match self {
            Card::Ship(card) => card.render(ctx),
            Card::Pilot(card) => card.render(ctx),
            Card::Upgrade(card) => card.render(ctx),
            Card::Damage(card) => card.render(ctx),
            Card::Condition(card) => card.render(ctx),
        }
    }
}

/// Summary line of a pilot inside a squad list:
/// `{t65xwing}{initiative5} [Luke Skywalker](link) [62]`.
#[must_use]
pub fn pilot_line(pilot: &Pilot, ctx: &RenderContext<'_>) -> String {
    let ship = ctx
        .index
        .ship_of(pilot)
        .map_or_else(String::new, |ship| iconify(&ship.base.xws));
    format!(
        "{ship}{} {} {}",
        iconify(&format!("initiative{}", pilot.initiative)),
        ctx.name_link(&pilot.base),
        cost_label(&pilot.base.cost)
    )
}

/// One-line label for selection menus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectLabel {
    pub icon: Option<String>,
    pub label: String,
}

fn joined(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Short label for a card: bullets, name, faction, mode and cost.
#[must_use]
pub fn select_label(card: &Card, ctx: &RenderContext<'_>) -> SelectLabel {
    let base = card.base();
    let limited = bullets(base.limited);
    match card {
        Card::Ship(ship) => {
            let faction = format!("({})", ctx.faction_name(&ship.faction));
            let loadout = if ship.standard_loadout_only {
                "(Standard Loadout)"
            } else {
                ""
            };
            SelectLabel {
                icon: Some(iconify(&base.xws)),
                label: joined(&[base.name.as_str(), faction.as_str(), loadout]),
            }
        }
        Card::Pilot(pilot) => {
            let faction = format!("({})", ctx.faction_name(&pilot.faction));
            let icon = ctx.index.ship_of(pilot).map(|ship| iconify(&ship.base.xws));
            SelectLabel {
                icon,
                label: joined(&[
                    limited.as_str(),
                    base.name.as_str(),
                    faction.as_str(),
                    base.legality.mode_tag(),
                    cost_label(&base.cost).as_str(),
                ]),
            }
        }
        Card::Upgrade(upgrade) => {
            let loadout = if upgrade.standard_loadout_only {
                "(Standard Loadout)"
            } else {
                ""
            };
            let factions: Vec<String> = base
                .restrictions
                .iter()
                .flat_map(|group| group.factions.iter())
                .map(|xws| ctx.faction_name(xws))
                .collect();
            let factions = if factions.is_empty() {
                String::new()
            } else {
                format!("({})", factions.join(","))
            };
            let cost = if base.cost.is_variable() && !upgrade.standard_loadout_only {
                "[Variable]".to_string()
            } else {
                upgrade_cost_label(upgrade)
            };
            SelectLabel {
                icon: Some(iconify(upgrade.slot_type())),
                label: joined(&[
                    limited.as_str(),
                    base.name.as_str(),
                    loadout,
                    factions.as_str(),
                    base.legality.mode_tag(),
                    cost.as_str(),
                ]),
            }
        }
        Card::Damage(_) | Card::Condition(_) => SelectLabel {
            icon: None,
            label: joined(&[limited.as_str(), base.name.as_str()]),
        },
    }
}

/// Label for picking a pilot from its ship's roster.
#[must_use]
pub fn pilot_label(pilot: &Pilot) -> SelectLabel {
    let mut name = pilot.base.name.clone();
    if let Some(caption) = pilot.base.caption.as_deref().filter(|c| !c.is_empty()) {
        name.push_str(": ");
        name.push_str(caption);
    }
    SelectLabel {
        icon: Some(iconify(&format!("initiative{}", pilot.initiative))),
        label: joined(&[
            bullets(pilot.base.limited).as_str(),
            name.as_str(),
            cost_label(&pilot.base.cost).as_str(),
        ]),
    }
}
