//! Shared Tailwind class constants to keep the landing sections and auth
//! shell visually consistent.

pub struct Theme;

impl Theme {
    /// Outer wrapper for a full-width landing section.
    pub const SECTION: &'static str = "mx-auto max-w-screen-xl px-6 py-16";

    /// Section heading shared by about, solution, and pricing.
    pub const SECTION_TITLE: &'static str =
        "text-3xl font-semibold tracking-tight text-slate-900 dark:text-white";

    /// Small uppercase label above section headings.
    pub const EYEBROW: &'static str =
        "text-[11px] font-semibold uppercase tracking-[0.2em] text-emerald-600";

    /// Card surface used by the solution grid and pricing cards.
    pub const CARD: &'static str = "rounded-2xl border border-slate-200 bg-white p-6 shadow-sm dark:border-slate-700 dark:bg-slate-800";

    /// Text input used by the auth forms.
    pub const INPUT: &'static str = "w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200";

    /// Form label used by the auth forms.
    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-slate-700";

    /// Inline text link.
    pub const LINK: &'static str = "font-medium text-emerald-700 hover:underline";
}
