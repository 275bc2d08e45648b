use dioxus::prelude::*;

use crate::domain::{format_money, ReturnSlice};

/// Radius giving the ring a circumference of exactly 100 user units, so
/// dash lengths can be written as percentages.
const RING_RADIUS: f64 = 15.915_494_309_189_533;
/// Dash offsets start at 3 o'clock; shift a quarter turn to start at 12.
const START_OFFSET: f64 = 25.0;

#[derive(Clone, Debug, PartialEq)]
pub struct RingSegment {
    pub name: &'static str,
    pub fill: &'static str,
    pub percent: f64,
    pub dash_array: String,
    pub dash_offset: String,
}

/// Converts slices into ring segments. Non-positive or non-finite slices
/// are not drawable and are skipped; the legend still lists them.
pub fn ring_segments(slices: &[ReturnSlice]) -> Vec<RingSegment> {
    let drawable: Vec<&ReturnSlice> = slices
        .iter()
        .filter(|slice| slice.value.is_finite() && slice.value > 0.0)
        .collect();
    let total: f64 = drawable.iter().map(|slice| slice.value).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut consumed = 0.0;
    drawable
        .into_iter()
        .map(|slice| {
            let percent = slice.value / total * 100.0;
            let segment = RingSegment {
                name: slice.name,
                fill: slice.fill,
                percent,
                dash_array: format!("{percent:.3} {:.3}", 100.0 - percent),
                dash_offset: format!("{:.3}", START_OFFSET - consumed),
            };
            consumed += percent;
            segment
        })
        .collect()
}

#[component]
pub fn ReturnPie(slices: Vec<ReturnSlice>) -> Element {
    let segments = ring_segments(&slices);
    let legend = slices
        .iter()
        .map(|slice| (slice.name, slice.fill, format_money(slice.value, 1)))
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "flex flex-col items-center gap-4",
            svg {
                class: "h-48 w-48",
                view_box: "0 0 42 42",
                circle {
                    cx: "21",
                    cy: "21",
                    r: "{RING_RADIUS}",
                    fill: "transparent",
                    stroke: "#f1f5f9",
                    stroke_width: "6",
                }
                for segment in segments {
                    circle {
                        key: "{segment.name}",
                        cx: "21",
                        cy: "21",
                        r: "{RING_RADIUS}",
                        fill: "transparent",
                        stroke: "{segment.fill}",
                        stroke_width: "6",
                        stroke_dasharray: "{segment.dash_array}",
                        stroke_dashoffset: "{segment.dash_offset}",
                    }
                }
            }
            ul {
                class: "grid w-full grid-cols-3 gap-2 text-center",
                for (name, fill, value) in legend {
                    li {
                        key: "{name}",
                        class: "rounded-lg bg-slate-50 px-2 py-1",
                        span {
                            class: "mr-1 inline-block h-2 w-2 rounded-full",
                            style: "background-color: {fill}",
                        }
                        span { class: "text-[10px] font-semibold uppercase text-slate-500", "{name}" }
                        p { class: "text-sm font-bold text-slate-900", "{value}%" }
                    }
                }
            }
        }
    }
}
