//! Unit tests for ca-core primitives.

#[cfg(test)]
mod ids {
    use crate::CellId;

    #[test]
    fn index_roundtrip() {
        let id = CellId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CellId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(CellId(0) < CellId(1));
    }

    #[test]
    fn display() {
        assert_eq!(CellId(7).to_string(), "CellId(7)");
    }
}

#[cfg(test)]
mod coord {
    use crate::Coord;

    #[test]
    fn bounds() {
        assert!(Coord::new(0, 0).in_bounds(5));
        assert!(Coord::new(4, 4).in_bounds(5));
        assert!(!Coord::new(5, 0).in_bounds(5));
        assert!(!Coord::new(0, -1).in_bounds(5));
    }

    #[test]
    fn chebyshev_distance() {
        let c = Coord::new(2, 2);
        assert_eq!(c.chebyshev(c), 0);
        assert_eq!(c.chebyshev(Coord::new(3, 1)), 1);
        assert_eq!(c.chebyshev(Coord::new(0, 5)), 3);
    }

    #[test]
    fn offset_and_display() {
        assert_eq!(Coord::new(1, 1).offset(-1, 2), Coord::new(0, 3));
        assert_eq!(Coord::new(3, 4).to_string(), "(3, 4)");
    }
}

#[cfg(test)]
mod status {
    use crate::Status;

    #[test]
    fn default_is_susceptible() {
        assert_eq!(Status::default(), Status::Susceptible);
    }

    #[test]
    fn queued_states() {
        assert!(!Status::Susceptible.is_queued());
        assert!(Status::Infected.is_queued());
        assert!(Status::Detected.is_queued());
        assert!(Status::Immune.is_queued());
        assert!(!Status::Dead.is_queued());
    }

    #[test]
    fn parse() {
        assert_eq!("dead".parse::<Status>().unwrap(), Status::Dead);
        assert_eq!(" Immune ".parse::<Status>().unwrap(), Status::Immune);
        assert!("zombie".parse::<Status>().is_err());
    }
}

#[cfg(test)]
mod params {
    use crate::{EpiParams, SimConfig};

    #[test]
    fn defaults() {
        let p = EpiParams::default();
        assert_eq!(p.transmission_rate, 2.95);
        assert_eq!(p.detection_delay_days, 5);
        assert_eq!(p.infectious_days, 9);
        assert_eq!(p.immunity_days, 90);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rate_out_of_range_rejected() {
        let p = EpiParams { death_rate: 120.0, ..EpiParams::default() };
        assert!(p.validate().is_err());
        let p = EpiParams { cure_rate: f64::NAN, ..EpiParams::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn config_defaults() {
        let cfg = SimConfig::new(100, 5, 3, 42);
        assert_eq!(cfg.grid_size, 450);
        assert_eq!(cfg.travel_radius, 1);
        assert_eq!(cfg.cell_count(), 202_500);
        assert!(cfg.travel_enabled());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_grid_rejected() {
        let cfg = SimConfig { grid_size: 0, ..SimConfig::new(1, 1, 1, 1) };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.percent(), r2.percent());
        }
    }

    #[test]
    fn percent_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            assert!(rng.percent() < 100);
        }
    }

    #[test]
    fn chance_extremes() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(100.0));
        }
    }
}
