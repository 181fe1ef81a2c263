//! Shared class strings so panels, inputs, and tables stay consistent
//! across the page.

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40";

pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";

pub const INPUT: &str = "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 \
     text-sm text-slate-100 focus:border-indigo-500 focus:outline-none";

pub const BTN_PRIMARY: &str =
    "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400";

pub const BTN_GHOST: &str = "rounded-lg border border-slate-700 px-4 py-2 text-sm text-slate-400 \
     hover:border-slate-600 hover:text-slate-200";

pub const TABLE_CONTAINER: &str =
    "rounded-xl border border-slate-800 bg-slate-900/40 overflow-hidden";

pub const TABLE_HEADER: &str =
    "border-b border-slate-800 bg-slate-900/60 text-xs uppercase text-slate-500";

pub const TABLE_DIVIDER: &str = "divide-y divide-slate-800";

pub const TEXT_MUTED: &str = "text-slate-500";
