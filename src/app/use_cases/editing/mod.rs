//! Use-Case-Funktionen für Linien-Bearbeitung.
//!
//! Aufgeteilt nach Operation:
//! - `vertex` — Stützpunkt in einer Linie finden
//! - `insert_point` — Mittelpunkt nach einem Stützpunkt einfügen
//! - `extend` — Linie am Ende weiterzeichnen
//! - `join` — Zwei Linien verbinden
//! - `duplicate` — Linie duplizieren
//! - `add_point` — Punkt hinzufügen je nach Zeichenmodus
mod add_point;
mod duplicate;
mod extend;
mod insert_point;
mod join;
mod vertex;

pub use add_point::add_line_point;
pub use duplicate::{duplicate, duplicate_displayed_line};
pub use extend::{extend_from, extend_line};
pub use insert_point::{insert_midpoint, insert_point_into_line};
pub use join::{join_displayed_lines, join_lines, order_for_join};
pub use vertex::find_vertex_index;
