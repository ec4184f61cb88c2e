pub mod gameTable;
pub mod holdingsDialog;
pub mod newGameDialog;
pub mod newPortfolioDialog;
pub mod portfoliosDialog;
pub mod toast;
pub mod tradeDialog;
