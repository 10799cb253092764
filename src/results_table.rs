//! Results table: swatch, name, hex, RGB and HSL columns.

use floem::prelude::*;

use crate::color::ColorEntry;
use crate::constants;
use crate::inputs::copy_button;

fn cell(text: String, width: f32) -> impl IntoView {
    label(move || text.clone()).style(move |s| {
        s.width(width)
            .font_size(constants::LABEL_FONT)
            .font_family("monospace".to_string())
    })
}

fn header() -> impl IntoView {
    h_stack((
        empty().style(|s| s.width(constants::SWATCH_SIZE)),
        cell("Name".to_string(), constants::NAME_COLUMN),
        cell("Hex".to_string(), constants::HEX_COLUMN),
        cell("RGB".to_string(), constants::RGB_COLUMN),
        cell("HSL".to_string(), constants::HSL_COLUMN),
    ))
    .style(|s| {
        s.gap(constants::GAP)
            .items_center()
            .padding_bottom(4.0)
            .border_bottom(1.0)
            .border_color(Color::rgb8(200, 200, 200))
    })
}

fn row(entry: ColorEntry) -> impl IntoView {
    let rgb = entry.rgb;
    let hex = entry.hex.clone();
    h_stack((
        empty().style(move |s| {
            s.size(constants::SWATCH_SIZE, constants::SWATCH_SIZE)
                .border_radius(constants::RADIUS)
                .border(1.0)
                .border_color(Color::rgb8(180, 180, 180))
                .background(Color::rgb8(rgb.r, rgb.g, rgb.b))
        }),
        cell(entry.name, constants::NAME_COLUMN),
        cell(entry.hex, constants::HEX_COLUMN),
        cell(entry.rgb.to_string(), constants::RGB_COLUMN),
        cell(entry.hsl.to_string(), constants::HSL_COLUMN),
        copy_button(move || hex.clone()),
    ))
    .style(|s| s.gap(constants::GAP).items_center())
}

/// A scrollable table of `entries()`, rebuilt whenever it changes.
pub(crate) fn results_table(entries: impl Fn() -> Vec<ColorEntry> + 'static) -> impl IntoView {
    v_stack((
        header(),
        scroll(
            dyn_stack(
                move || entries().into_iter().enumerate(),
                |(i, entry)| (*i, entry.hex.clone()),
                |(_, entry)| row(entry),
            )
            .style(|s| s.flex_col().gap(4.0)),
        )
        .style(|s| s.flex_grow(1.0).width_full()),
    ))
    .style(|s| s.gap(4.0).flex_grow(1.0))
}
