//! Landing page: an animated grid of fading letters filling the viewport,
//! with the navigation menu in a merged cell at the center.
//!
//! The churn schedule (which cells refresh, with what letters and lifetimes)
//! lives in [`page_effects`]; this module owns the DOM cells, the tick
//! interval, and the fade timers.

use std::time::Duration;

use leptos::*;
use page_effects::{
    best_layout, merge_region, CellUpdate, GridConfig, GridDimensions, LayoutKind, LetterGrid,
    MergeRegion, Space, GAP,
};
use leptos_router::A;
use rand::{rngs::StdRng, SeedableRng};
use resume_model::sample_resume;

/// Animation state plus its RNG and a monotonic clock, advanced per tick.
struct GridDriver {
    grid: LetterGrid,
    rng: StdRng,
    clock_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LetterCell {
    letter: char,
    visible: bool,
}

impl LetterCell {
    fn blank() -> Self {
        Self {
            letter: ' ',
            visible: false,
        }
    }
}

fn viewport_size() -> (f64, f64) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window.inner_width().ok().and_then(|value| value.as_f64());
            let height = window.inner_height().ok().and_then(|value| value.as_f64());
            if let (Some(width), Some(height)) = (width, height) {
                return (width, height);
            }
        }
    }
    (1280.0, 720.0)
}

/// Shows each updated cell's new letter and schedules its fade-out.
fn apply_updates(cells: RwSignal<Vec<RwSignal<LetterCell>>>, updates: Vec<CellUpdate>) {
    for update in updates {
        let Some(cell) = cells.with_untracked(|cells| cells.get(update.index).copied()) else {
            continue;
        };
        cell.set(LetterCell {
            letter: update.letter,
            visible: true,
        });
        set_timeout(
            move || cell.update(|cell| cell.visible = false),
            Duration::from_millis(u64::from(update.lifetime_ms)),
        );
    }
}

fn grid_template(dims: GridDimensions) -> String {
    format!(
        "grid-template-columns: repeat({}, 1fr); grid-template-rows: repeat({}, 1fr);",
        dims.columns.max(1),
        dims.rows.max(1),
    )
}

fn merged_cell_style(region: MergeRegion) -> String {
    format!(
        "grid-row: span {}; grid-column: span {};",
        region.rows.max(1),
        region.cols.max(1),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn grid_template_tracks_dimensions() {
        let dims = GridDimensions {
            columns: 40,
            rows: 20,
        };
        assert_eq!(
            grid_template(dims),
            "grid-template-columns: repeat(40, 1fr); grid-template-rows: repeat(20, 1fr);"
        );
    }

    #[test]
    fn degenerate_grids_still_produce_valid_css() {
        let dims = GridDimensions {
            columns: 0,
            rows: 0,
        };
        assert_eq!(
            grid_template(dims),
            "grid-template-columns: repeat(1, 1fr); grid-template-rows: repeat(1, 1fr);"
        );
        let region = MergeRegion {
            start_row: 0,
            start_col: 0,
            rows: 0,
            cols: 0,
        };
        assert_eq!(
            merged_cell_style(region),
            "grid-row: span 1; grid-column: span 1;"
        );
    }
}

#[component]
/// Full-viewport letter-grid backdrop with the centered menu cell.
pub fn HomePage() -> impl IntoView {
    let config = GridConfig::default();
    let tick_ms = config.tick_interval_ms;
    let center_percent_y = config.center_percent_y;

    let driver = store_value(GridDriver {
        grid: LetterGrid::new(config, 0),
        rng: StdRng::from_entropy(),
        clock_ms: 0,
    });
    let dims = create_rw_signal(GridDimensions {
        columns: 0,
        rows: 0,
    });
    let region = create_rw_signal(MergeRegion {
        start_row: 0,
        start_col: 0,
        rows: 0,
        cols: 0,
    });
    let cells = create_rw_signal(Vec::<RwSignal<LetterCell>>::new());
    let menu_space = create_rw_signal(Space {
        width: 0.0,
        height: 0.0,
    });

    // Rebuilt wholesale on every resize, like the initial build.
    let rebuild = move || {
        let (width, height) = viewport_size();
        let new_dims = driver.with_value(|driver| driver.grid.config().dimensions(width, height));
        let new_region = merge_region(
            new_dims,
            GridConfig::center_percent_x(width),
            center_percent_y,
        );
        dims.set(new_dims);
        region.set(new_region);
        cells.set(
            (0..new_dims.total_cells())
                .map(|_| create_rw_signal(LetterCell::blank()))
                .collect(),
        );
        menu_space.set(Space::inside(
            width * new_region.cols as f64 / new_dims.columns.max(1) as f64,
            height * new_region.rows as f64 / new_dims.rows.max(1) as f64,
        ));

        let updates = driver
            .try_update_value(|driver| {
                driver.grid.reset(new_dims.total_cells());
                driver.clock_ms += driver.grid.config().cooldown_ms();
                let now = driver.clock_ms;
                let GridDriver { grid, rng, .. } = driver;
                grid.seed_initial(now, rng)
            })
            .unwrap_or_default();
        apply_updates(cells, updates);
    };
    rebuild();

    if let Ok(interval) = set_interval_with_handle(
        move || {
            let updates = driver
                .try_update_value(|driver| {
                    driver.clock_ms += u64::from(tick_ms);
                    let now = driver.clock_ms;
                    let GridDriver { grid, rng, .. } = driver;
                    grid.tick(now, rng)
                })
                .unwrap_or_default();
            apply_updates(cells, updates);
        },
        Duration::from_millis(u64::from(tick_ms)),
    ) {
        on_cleanup(move || interval.clear());
    }

    let resize = window_event_listener(ev::resize, move |_| rebuild());
    on_cleanup(move || resize.remove());

    view! {
        <div class="letter-grid" style=move || grid_template(dims.get())>
            {move || {
                let dims = dims.get();
                let region = region.get();
                let cells = cells.get();
                let mut rendered = Vec::new();
                for row in 0..dims.rows {
                    for col in 0..dims.columns {
                        if row == region.start_row && col == region.start_col {
                            rendered.push(
                                view! {
                                    <div class="menu-space" style=merged_cell_style(region)>
                                        <ButtonMenu space=menu_space />
                                    </div>
                                }
                                .into_view(),
                            );
                            continue;
                        }
                        if region.contains(row, col) {
                            continue;
                        }
                        let Some(cell) = cells.get(row * dims.columns + col).copied() else {
                            continue;
                        };
                        rendered.push(
                            view! {
                                <div class="grid-cell" class:visible=move || cell.get().visible>
                                    {move || cell.get().letter.to_string()}
                                </div>
                            }
                            .into_view(),
                        );
                    }
                }
                rendered
            }}
        </div>
    }
}

#[component]
/// Three navigation buttons sized by the best-fit layout for the space the
/// merged center cell offers.
pub fn ButtonMenu(
    /// Usable space inside the merged cell, updated on resize.
    space: RwSignal<Space>,
) -> impl IntoView {
    let contact = sample_resume().header.contact;
    let github_url = format!("https://{}", contact.github);
    let mailto_url = format!("mailto:{}", contact.email);

    let choice = create_memo(move |_| best_layout(space.get()));
    let container_style = move || {
        let choice = choice.get();
        format!(
            "grid-template-columns: repeat({}, {:.0}px); grid-template-rows: repeat({}, {:.0}px); gap: {GAP}px;",
            choice.layout.cols, choice.button_size, choice.layout.rows, choice.button_size,
        )
    };
    // In the 2x2 arrangement the odd button out stretches across both columns.
    let third_style = move || match choice.get().layout.kind {
        LayoutKind::Grid => "grid-column: 1 / -1;",
        LayoutKind::Horizontal | LayoutKind::Vertical => "",
    };

    view! {
        <nav class="button-menu" style=container_style>
            <A class="menu-button" href="/terminal">
                "Terminal CV"
            </A>
            <a class="menu-button" href=github_url target="_blank" rel="noreferrer">
                "GitHub"
            </a>
            <a class="menu-button" style=third_style href=mailto_url>
                "Email"
            </a>
        </nav>
    }
}
