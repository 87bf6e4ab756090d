pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use error::ConfigError;
pub use model::config::MementoConfig;
pub use model::free_time::FreeTimeStats;
pub use model::life::LifeStats;
pub use model::parent_time::{ParentDays, ParentTimeStats};
pub use model::weekend::WeekendStats;
pub use model::work_life::WorkLifeStats;
pub use model::year::{Weekend, YearStats};
pub use repository::{ConfigRepository, FileConfigRepository};
pub use service::dto::{LifeGrid, ProgressBand, SummaryView, WeekCell, YearOverview};
pub use service::stats_service::{calculate_all_stats, AllStats, StatsParams, StatsService};
pub use time::{local_today, parse_birthdate};
pub use usecase::life_grid::{build_life_grid, LifeGridUseCase};
pub use usecase::summary::{build_summary, wisdom_quote, SummaryUseCase};
pub use usecase::year_overview::{build_year_overview, YearOverviewUseCase};
