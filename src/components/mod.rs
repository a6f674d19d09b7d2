// UI Components
// Product presentation, the three listing strategies and shared chrome

pub mod icons;
pub mod product_card;
pub mod product_grid;
pub mod virtual_list;
pub mod lazy_list;
pub mod paginated_list;
pub mod filter_bar;
pub mod product_browser;
pub mod checkout_modal;
pub mod header;

pub use product_card::{ProductCard, ProductCardSkeleton, ProductListItem};
pub use product_grid::{ListFooter, ProductTile};
pub use virtual_list::VirtualList;
pub use lazy_list::LazyList;
pub use paginated_list::PaginatedList;
pub use filter_bar::{FilterBar, QuickFilters};
pub use product_browser::ProductBrowser;
pub use checkout_modal::CheckoutModal;
pub use header::Header;
