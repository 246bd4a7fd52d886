//! Dashboard pages and sidebar navigation entries

/// Content panel shown by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Orders,
    Returns,
    Payments,
    Tolerance,
    Negative,
    Documents,
    Products,
    Customers,
    Settings,
    PreviousMonth,
    Analytics,
    Revenue,
    Transactions,
    Reports,
    Notifications,
    Help,
    Logout,
}

impl Page {
    pub fn all() -> Vec<Page> {
        vec![
            Page::Dashboard,
            Page::Orders,
            Page::Returns,
            Page::Payments,
            Page::Tolerance,
            Page::Negative,
            Page::Documents,
            Page::Products,
            Page::Customers,
            Page::Settings,
            Page::PreviousMonth,
            Page::Analytics,
            Page::Revenue,
            Page::Transactions,
            Page::Reports,
            Page::Notifications,
            Page::Help,
            Page::Logout,
        ]
    }

    /// Title shown in the breadcrumb and on static pages
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Orders => "Order & Payment Received",
            Page::Returns => "Returns",
            Page::Payments => "Payment Pending",
            Page::Tolerance => "Tolerance Rate Breached",
            Page::Negative => "Negative Payout",
            Page::Documents => "Documents",
            Page::Products => "Products",
            Page::Customers => "Customers",
            Page::Settings => "Settings",
            Page::PreviousMonth => "Previous Month Orders",
            Page::Analytics => "Analytics",
            Page::Revenue => "Revenue",
            Page::Transactions => "Transactions",
            Page::Reports => "Reports",
            Page::Notifications => "Notifications",
            Page::Help => "Help",
            Page::Logout => "Logout",
        }
    }

    /// Stable slug, used in log output
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Orders => "orders",
            Page::Returns => "returns",
            Page::Payments => "payments",
            Page::Tolerance => "tolerance",
            Page::Negative => "negative",
            Page::Documents => "documents",
            Page::Products => "products",
            Page::Customers => "customers",
            Page::Settings => "settings",
            Page::PreviousMonth => "previous-month",
            Page::Analytics => "analytics",
            Page::Revenue => "revenue",
            Page::Transactions => "transactions",
            Page::Reports => "reports",
            Page::Notifications => "notifications",
            Page::Help => "help",
            Page::Logout => "logout",
        }
    }
}

/// Sidebar section an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarSection {
    Main,
    Footer,
}

/// A clickable sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarItem {
    pub label: &'static str,
    pub page: Page,
    /// Single-cell glyph shown when the sidebar is collapsed
    pub glyph: &'static str,
    pub section: SidebarSection,
}

const fn item(label: &'static str, page: Page, glyph: &'static str, section: SidebarSection) -> SidebarItem {
    SidebarItem {
        label,
        page,
        glyph,
        section,
    }
}

const SIDEBAR: [SidebarItem; 13] = [
    item("Dashboard", Page::Dashboard, "▦", SidebarSection::Main),
    item("Analytics", Page::Analytics, "▤", SidebarSection::Main),
    item("Payments", Page::Payments, "$", SidebarSection::Main),
    item("Revenue", Page::Revenue, "¢", SidebarSection::Main),
    item("Transactions", Page::Transactions, "⇄", SidebarSection::Main),
    item("Reports", Page::Reports, "≡", SidebarSection::Main),
    item("Documents", Page::Documents, "▯", SidebarSection::Main),
    item("Products", Page::Products, "□", SidebarSection::Main),
    item("Customers", Page::Customers, "☺", SidebarSection::Main),
    item("Settings", Page::Settings, "⚙", SidebarSection::Main),
    item("Notifications", Page::Notifications, "!", SidebarSection::Footer),
    item("Help", Page::Help, "?", SidebarSection::Footer),
    item("Logout", Page::Logout, "⏻", SidebarSection::Footer),
];

/// All sidebar entries, main section first
pub fn sidebar_items() -> &'static [SidebarItem] {
    &SIDEBAR
}

/// Next page in sidebar order, wrapping around
///
/// Pages without a sidebar entry (e.g. Orders) continue from the start.
pub fn next_sidebar_page(current: Page) -> Page {
    let items = sidebar_items();
    match items.iter().position(|i| i.page == current) {
        Some(idx) => items[(idx + 1) % items.len()].page,
        None => items[0].page,
    }
}

/// Previous page in sidebar order, wrapping around
pub fn previous_sidebar_page(current: Page) -> Page {
    let items = sidebar_items();
    match items.iter().position(|i| i.page == current) {
        Some(0) | None => items[items.len() - 1].page,
        Some(idx) => items[idx - 1].page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_page_has_title_and_unique_slug() {
        let pages = Page::all();
        assert_eq!(pages.len(), 18);

        let slugs: HashSet<&str> = pages.iter().map(|p| p.slug()).collect();
        assert_eq!(slugs.len(), pages.len());

        assert_eq!(Page::Orders.title(), "Order & Payment Received");
        assert_eq!(Page::PreviousMonth.title(), "Previous Month Orders");
    }

    #[test]
    fn test_default_page_is_dashboard() {
        assert_eq!(Page::default(), Page::Dashboard);
    }

    #[test]
    fn test_sidebar_cycle_wraps() {
        assert_eq!(next_sidebar_page(Page::Dashboard), Page::Analytics);
        assert_eq!(next_sidebar_page(Page::Logout), Page::Dashboard);
        assert_eq!(previous_sidebar_page(Page::Dashboard), Page::Logout);
        assert_eq!(previous_sidebar_page(Page::Analytics), Page::Dashboard);
    }

    #[test]
    fn test_sidebar_cycle_from_page_without_entry() {
        assert_eq!(next_sidebar_page(Page::Orders), Page::Dashboard);
        assert_eq!(previous_sidebar_page(Page::Orders), Page::Logout);
    }

    #[test]
    fn test_sidebar_sections() {
        let footer: Vec<Page> = sidebar_items()
            .iter()
            .filter(|i| i.section == SidebarSection::Footer)
            .map(|i| i.page)
            .collect();
        assert_eq!(footer, vec![Page::Notifications, Page::Help, Page::Logout]);
    }
}
