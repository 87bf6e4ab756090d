#[cfg(test)]
mod tests {
    use crate::model::config::MementoConfig;
    use crate::repository::ConfigRepository;
    use crate::service::stats_service::StatsService;
    use crate::usecase::life_grid::LifeGridUseCase;
    use crate::usecase::summary::SummaryUseCase;
    use crate::usecase::year_overview::YearOverviewUseCase;
    use anyhow::Result;
    use chrono::NaiveDate;
    use std::cell::Cell;
    use std::path::Path;

    struct MockConfigRepo {
        config: MementoConfig,
    }

    impl ConfigRepository for MockConfigRepo {
        fn load(&self) -> Result<MementoConfig> { Ok(self.config.clone()) }
        fn save(&self, _config: &MementoConfig) -> Result<()> { Ok(()) }
        fn path(&self) -> &Path { Path::new("mock.json") }
    }

    struct CountingConfigRepo {
        config: MementoConfig,
        loads: Cell<usize>,
    }

    impl ConfigRepository for CountingConfigRepo {
        fn load(&self) -> Result<MementoConfig> {
            self.loads.set(self.loads.get() + 1);
            Ok(self.config.clone())
        }
        fn save(&self, _config: &MementoConfig) -> Result<()> { Ok(()) }
        fn path(&self) -> &Path { Path::new("counting.json") }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service_with(config: MementoConfig) -> StatsService<MockConfigRepo> {
        StatsService::new(MockConfigRepo { config })
    }

    #[test]
    fn test_summary_for_reference_birthdate() {
        let service = service_with(MementoConfig::default());
        let summary = SummaryUseCase::new(&service).get_summary(date(2024, 1, 1)).unwrap();

        assert_eq!(summary.life.weeks_lived, 1774);
        assert_eq!(summary.life.total_weeks, 4160);
        assert_eq!(summary.life.weeks_remaining, 2386);
        assert!((summary.life.percentage_lived - 42.6).abs() < 0.05);
        assert!((summary.life.age_years - 34.0).abs() < 0.01);
        assert_eq!(summary.free_time.free_weeks_lived, 362);
        assert_eq!(summary.weekends.weekends_remaining, 2386);
        assert!(summary.wisdom.contains("Jobs"));
        // No parent ages configured
        assert!(summary.family.is_none());
    }

    #[test]
    fn test_summary_family_section_keeps_unknown_parent_apart() {
        let mut config = MementoConfig::default();
        config.parents.father_age = Some(90);
        config.parents.mother_age = None;
        let service = service_with(config.clone());
        let summary = SummaryUseCase::new(&service).get_summary(date(2024, 1, 1)).unwrap();
        // Father past the expectancy, mother unknown: nothing left to show
        assert!(summary.family.is_none());

        config.parents.mother_age = Some(60);
        let service = service_with(config);
        let family = SummaryUseCase::new(&service)
            .get_summary(date(2024, 1, 1))
            .unwrap()
            .family
            .unwrap();

        assert_eq!(family.days_with_father, Some(0));
        assert_eq!(family.days_with_mother, Some(400));
        assert_eq!(family.total_days, 400);
    }

    #[test]
    fn test_summary_is_idempotent() {
        let service = service_with(MementoConfig::default());
        let usecase = SummaryUseCase::new(&service);

        let first = usecase.get_summary(date(2025, 3, 9)).unwrap();
        let second = usecase.get_summary(date(2025, 3, 9)).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_grid_usecase() {
        let service = service_with(MementoConfig::default());
        let grid = LifeGridUseCase::new(&service).get_grid(date(2024, 1, 1)).unwrap();

        assert_eq!(grid.rows.len(), 80);
        assert_eq!(grid.weeks_lived, 1774);
    }

    #[test]
    fn test_year_overview_uses_configured_free_time() {
        let mut config = MementoConfig::default();
        config.time_assumptions.sleep_hours_per_day = 8.0;
        config.time_assumptions.work_hours_per_day = 4.0;
        config.time_assumptions.chores_hours_per_day = 0.0;
        let service = service_with(config);

        // 2024-12-01: four full weekends left, half of each day is free
        let overview = YearOverviewUseCase::new(&service)
            .get_overview(date(2024, 12, 1))
            .unwrap();

        assert_eq!(overview.free_time_percentage, 50.0);
        assert_eq!(overview.weekend_days, 8);
        assert_eq!(overview.free_weekend_days, 4);
    }

    #[test]
    fn test_usecases_surface_invalid_config() {
        let config = MementoConfig {
            birthdate: date(2030, 1, 1),
            ..MementoConfig::default()
        };
        let service = service_with(config);

        assert!(SummaryUseCase::new(&service).get_summary(date(2024, 1, 1)).is_err());
        assert!(LifeGridUseCase::new(&service).get_grid(date(2024, 1, 1)).is_err());
        assert!(YearOverviewUseCase::new(&service).get_overview(date(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_dashboard_data_reads_config_once() {
        let service = StatsService::new(CountingConfigRepo {
            config: MementoConfig::default(),
            loads: Cell::new(0),
        });
        let today = date(2024, 1, 1);

        let summary = SummaryUseCase::new(&service).get_summary(today).unwrap();
        let overview = YearOverviewUseCase::new(&service).get_overview(today).unwrap();
        let grid = LifeGridUseCase::new(&service).get_grid(today).unwrap();

        assert_eq!(service.repository().loads.get(), 1);
        assert_eq!(summary.life.weeks_lived, grid.weeks_lived);
        assert_eq!(overview.free_time_percentage, summary.free_time.free_time_percentage);
    }

    #[test]
    fn test_birthdate_override_survives_cached_config() {
        let service = StatsService::new(CountingConfigRepo {
            config: MementoConfig::default(),
            loads: Cell::new(0),
        })
        .with_birthdate(Some(date(2000, 1, 1)));
        let today = date(2024, 1, 1);

        let first = SummaryUseCase::new(&service).get_summary(today).unwrap();
        let second = SummaryUseCase::new(&service).get_summary(today).unwrap();

        assert_eq!(first.birthdate, date(2000, 1, 1));
        assert_eq!(second.birthdate, date(2000, 1, 1));
        assert_eq!(service.repository().loads.get(), 1);
    }
}
