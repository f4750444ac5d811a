//! Integration tests for ca-output.

#[cfg(test)]
mod summary_tests {
    use ca_core::SimConfig;
    use ca_grid::PopulationCounts;
    use ca_sim::SimReport;

    use crate::{render_summary, write_summary};

    fn report() -> SimReport {
        let config = SimConfig::new(200, 10, 3, 1);
        let counts = PopulationCounts {
            susceptible: 202_000,
            infected:    120,
            detected:    80,
            immune:      290,
            dead:        10,
        };
        SimReport::new(&config, 57, counts, false)
    }

    #[test]
    fn every_line_is_48_columns() {
        let text = render_summary(&report());
        let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 13);
        for line in lines {
            assert_eq!(line.len(), 48, "bad width: {line:?}");
        }
    }

    #[test]
    fn values_are_right_aligned() {
        let text = render_summary(&report());
        assert!(text.contains("| Start Infected Cells:                     10 |"));
        assert!(text.contains("| Current Day:                              57 |"));
        assert!(text.contains("| Max Day:                                 200 |"));
        assert!(text.contains("| Susceptible Population:               202000 |"));
        assert!(text.contains("| Deceased Population:                      10 |"));
        assert!(text.contains("|                Simulation Data               |"));
    }

    #[test]
    fn framed_by_borders_and_blank_lines() {
        let text = render_summary(&report());
        assert!(text.starts_with("\n+---"));
        assert!(text.ends_with("---+\n\n"));
    }

    #[test]
    fn write_summary_matches_render() {
        let mut buf: Vec<u8> = Vec::new();
        write_summary(&mut buf, &report()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_summary(&report()));
    }
}

#[cfg(test)]
mod counter_tests {
    use std::fs;

    use tempfile::TempDir;

    use ca_core::Status;
    use ca_grid::PopulationCounts;

    use crate::{CounterLog, OutputError};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn appends_one_value_per_line() {
        let dir = tmp();
        let log = CounterLog::new(dir.path().join("dead.txt"));
        log.append(3).unwrap();
        log.append(17).unwrap();
        assert_eq!(fs::read_to_string(log.path()).unwrap(), "3\n17\n");
    }

    #[test]
    fn existing_content_is_kept() {
        let dir = tmp();
        let path = dir.path().join("series.txt");
        fs::write(&path, "1\n").unwrap();
        CounterLog::new(&path).append(2).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1\n2\n");
    }

    #[test]
    fn selects_counter_by_status() {
        let dir = tmp();
        let log = CounterLog::new(dir.path().join("immune.txt"));
        let counts = PopulationCounts { immune: 42, dead: 7, ..PopulationCounts::default() };
        log.append_status(&counts, Status::Immune).unwrap();
        log.append_status(&counts, Status::Dead).unwrap();
        assert_eq!(fs::read_to_string(log.path()).unwrap(), "42\n7\n");
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tmp();
        let log = CounterLog::new(dir.path().join("no/such/dir/out.txt"));
        assert!(matches!(log.append(1), Err(OutputError::File { .. })));
    }
}

#[cfg(test)]
mod observer_tests {
    use std::fs;

    use ca_core::{Coord, SimConfig, Status};
    use ca_sim::SimBuilder;

    use crate::{CounterLog, CounterLogObserver};

    fn small_sim(max_days: u32) -> ca_sim::Sim {
        let mut config = SimConfig::new(max_days, 0, 3, 5);
        config.grid_size = 5;
        config.travel_radius = 0;
        config.params.transmission_rate = 100.0;
        let mut sim = SimBuilder::new(config).build().unwrap();
        sim.seed_at(Coord::new(2, 2)).unwrap();
        sim
    }

    #[test]
    fn one_value_per_day_in_memory() {
        let mut sim = small_sim(3);
        let mut obs = CounterLogObserver::new(Vec::new(), Status::Susceptible);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer(), vec![16, 16, 0]);
    }

    #[test]
    fn integration_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("infected.txt");
        let mut sim = small_sim(2);
        let mut obs = CounterLogObserver::new(CounterLog::new(&path), Status::Infected);
        let report = sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let text = fs::read_to_string(&path).unwrap();
        let values: Vec<u64> = text.lines().map(|l| l.parse().unwrap()).collect();
        assert_eq!(values, vec![9, 9]);
        assert_eq!(*values.last().unwrap(), report.counts.infected);
    }

    #[test]
    fn write_errors_are_stored_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let log = CounterLog::new(dir.path().join("missing/out.txt"));
        let mut sim = small_sim(2);
        let mut obs = CounterLogObserver::new(log, Status::Dead);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_some());
        assert!(obs.take_error().is_none());
    }
}
