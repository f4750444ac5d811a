//! Unit tests for ca-grid.

#[cfg(test)]
mod grid {
    use ca_core::{CellId, Coord, Status};

    use crate::Grid;

    #[test]
    fn all_cells_start_susceptible() {
        let grid = Grid::new(4);
        assert_eq!(grid.count, 16);
        assert!(grid.cell_ids().all(|c| grid.status(c) == Status::Susceptible));
        assert!(grid.cell_ids().all(|c| grid.days_in_state(c) == 0));
        assert!(grid.cell_ids().all(|c| !grid.pending_new_infection(c)));
    }

    #[test]
    fn coordinate_roundtrip() {
        let grid = Grid::new(5);
        for cell in grid.cell_ids() {
            assert_eq!(grid.id_of(grid.coord_of(cell)), cell);
        }
        assert_eq!(grid.id_of(Coord::new(2, 3)), CellId(13));
        assert_eq!(grid.coord_of(CellId(24)), Coord::new(4, 4));
    }

    #[test]
    fn contains_clips_to_bounds() {
        let grid = Grid::new(3);
        assert!(grid.contains(Coord::new(2, 2)));
        assert!(!grid.contains(Coord::new(3, 0)));
        assert!(!grid.contains(Coord::new(-1, 1)));
    }

    #[test]
    fn day_counter_and_flag() {
        let mut grid = Grid::new(2);
        let c = CellId(3);
        grid.increment_days(c);
        grid.increment_days(c);
        assert_eq!(grid.days_in_state(c), 2);
        grid.reset_days(c);
        assert_eq!(grid.days_in_state(c), 0);

        grid.flip_pending(c);
        assert!(grid.pending_new_infection(c));
        grid.flip_pending(c);
        assert!(!grid.pending_new_infection(c));
    }

    #[test]
    fn zero_size_grid() {
        let grid = Grid::new(0);
        assert!(grid.is_empty());
        assert_eq!(grid.cell_ids().count(), 0);
    }
}

#[cfg(test)]
mod queue {
    use ca_core::{CellId, Status};

    use crate::{WorkQueue, WorkQueues};

    #[test]
    fn push_is_idempotent() {
        let mut q = WorkQueue::new();
        assert!(q.push(CellId(1)));
        assert!(!q.push(CellId(1)));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn remove_from_middle_keeps_others() {
        let mut q = WorkQueue::new();
        for i in 0..5 {
            q.push(CellId(i));
        }
        assert!(q.remove(CellId(1)));
        assert!(!q.remove(CellId(1)));
        assert_eq!(q.len(), 4);
        for i in [0, 2, 3, 4] {
            assert!(q.contains(CellId(i)), "CellId({i}) lost");
        }
        // The swapped-in member must still be removable.
        assert!(q.remove(CellId(4)));
        assert!(q.remove(CellId(0)));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn snapshot_is_detached() {
        let mut q = WorkQueue::new();
        q.push(CellId(7));
        let snap = q.snapshot();
        q.remove(CellId(7));
        q.push(CellId(8));
        assert_eq!(snap, vec![CellId(7)]);
        assert!(q.contains(CellId(8)));
    }

    #[test]
    fn status_lookup() {
        let queues = WorkQueues::new();
        assert!(queues.for_status(Status::Infected).is_some());
        assert!(queues.for_status(Status::Susceptible).is_none());
        assert!(queues.for_status(Status::Dead).is_none());
        assert!(queues.is_empty());
    }
}

#[cfg(test)]
mod population {
    use ca_core::{CellId, Status};

    use crate::{GridError, Population};

    #[test]
    fn fresh_population_is_consistent() {
        let pop = Population::new(5);
        assert_eq!(pop.counts().susceptible, 25);
        assert_eq!(pop.counts().total(), 25);
        pop.verify().unwrap();
    }

    #[test]
    fn infect_marks_pending_and_enqueues() {
        let mut pop = Population::new(3);
        pop.infect(CellId(4)).unwrap();
        assert_eq!(pop.status(CellId(4)), Status::Infected);
        assert!(pop.grid().pending_new_infection(CellId(4)));
        assert!(pop.queues().infected.contains(CellId(4)));
        assert_eq!(pop.counts().infected, 1);
        assert_eq!(pop.counts().susceptible, 8);
        pop.verify().unwrap();
    }

    #[test]
    fn seed_is_not_pending() {
        let mut pop = Population::new(3);
        pop.seed(CellId(0)).unwrap();
        assert!(!pop.grid().pending_new_infection(CellId(0)));
    }

    #[test]
    fn full_lifecycle_moves_between_queues() {
        let mut pop = Population::new(2);
        let c = CellId(2);
        pop.seed(c).unwrap();
        pop.grid_mut().increment_days(c);
        pop.transition(c, Status::Detected).unwrap();
        // Days infected carry over into quarantine.
        assert_eq!(pop.grid().days_in_state(c), 1);
        assert!(pop.queues().detected.contains(c));
        assert!(!pop.queues().infected.contains(c));

        pop.transition(c, Status::Immune).unwrap();
        assert_eq!(pop.grid().days_in_state(c), 0);
        assert!(pop.queues().immune.contains(c));

        pop.grid_mut().set_days_in_state(c, 90);
        pop.transition(c, Status::Susceptible).unwrap();
        assert_eq!(pop.grid().days_in_state(c), 0);
        assert!(pop.queues().is_empty());
        pop.verify().unwrap();
    }

    #[test]
    fn dead_is_terminal() {
        let mut pop = Population::new(2);
        pop.seed(CellId(0)).unwrap();
        pop.transition(CellId(0), Status::Dead).unwrap();
        assert_eq!(pop.counts().dead, 1);
        for to in Status::ALL {
            assert!(matches!(
                pop.transition(CellId(0), to),
                Err(GridError::IllegalTransition { .. })
            ));
        }
        pop.verify().unwrap();
    }

    #[test]
    fn reinfecting_infected_cell_is_rejected() {
        let mut pop = Population::new(2);
        pop.seed(CellId(1)).unwrap();
        assert!(pop.seed(CellId(1)).is_err());
        assert_eq!(pop.counts().infected, 1);
        assert_eq!(pop.queues().infected.len(), 1);
        pop.verify().unwrap();
    }

    #[test]
    fn verify_detects_bypassed_status_write() {
        let mut pop = Population::new(2);
        pop.grid_mut().set_status(CellId(0), Status::Immune);
        assert!(pop.verify().is_err());
    }
}
