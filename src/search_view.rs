//! Search screen: header, query input, status banners and the results table.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalUpdate, SignalWith};

use crate::constants;
use crate::inputs::query_input;
use crate::results_table::results_table;
use crate::searcher::ColourSearcher;

/// Builds the search screen over a shared search session.
pub(crate) fn search_view(searcher: RwSignal<ColourSearcher>) -> impl IntoView {
    let text = RwSignal::new(String::new());

    let on_submit = move |raw: String| {
        searcher.update(|s| {
            // Rejections are recorded on the session and shown by the banner.
            let _ = s.submit(&raw);
        });
    };

    v_stack((
        label(|| "Colour Searcher").style(|s| s.font_size(constants::HEADER_FONT)),
        query_input(text, move || searcher.with(|s| s.is_ready()), on_submit),
        label(|| "Invalid CSS color").style(move |s| {
            let (r, g, b) = constants::ERROR_RGB;
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(r, g, b))
                .apply_if(!searcher.with(|s| s.is_invalid()), |s| s.hide())
        }),
        label(move || {
            searcher.with(|s| {
                s.last_query()
                    .map(|q| format!("Results for \"{q}\""))
                    .unwrap_or_default()
            })
        })
        .style(move |s| {
            s.font_size(constants::LABEL_FONT)
                .apply_if(searcher.with(|s| s.last_query().is_none()), |s| s.hide())
        }),
        {
            let is_ready = move || searcher.with(|s| s.is_ready());
            label(|| "loading").style(move |s| s.apply_if(is_ready(), |s| s.hide()))
        },
        results_table(move || searcher.with(|s| s.displayed().to_vec())),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding(constants::PADDING)
            .size_full()
            .background(Color::rgb8(242, 242, 242))
    })
}
