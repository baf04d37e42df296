//! Tests for layout measurements and survey totals

#[cfg(test)]
mod tests {

    use bspdungeon::algorithm::generator::DungeonGenerator;
    use bspdungeon::algorithm::spawn::SpawnPhase;
    use bspdungeon::analysis::statistics::{
        LayoutStatistics, SurveyStatistics, overlapping_room_pairs,
    };
    use bspdungeon::spatial::rect::Rect;

    fn layout(seed: u64, room_count: usize, floor_cells: usize, connected: bool) -> LayoutStatistics {
        LayoutStatistics {
            seed,
            width: 10,
            height: 10,
            leaf_count: room_count.max(1),
            room_count,
            corridor_count: room_count.saturating_sub(1),
            floor_cells,
            regions: usize::from(floor_cells > 0) + usize::from(!connected),
            connected,
            overlapping_rooms: 0,
        }
    }

    // Tests measurements agree with the generated grid
    // Verified by counting rooms from leaves instead of placed rooms
    #[test]
    fn test_measure_generated_layout() {
        let dungeon = DungeonGenerator::new(17).generate_dungeon(50, 50);
        let stats = LayoutStatistics::measure(17, &dungeon);

        assert_eq!(stats.seed, 17);
        assert_eq!((stats.width, stats.height), (50, 50));
        assert_eq!(stats.room_count, dungeon.rooms.len());
        assert_eq!(stats.leaf_count, dungeon.leaf_count);
        assert_eq!(stats.corridor_count, dungeon.corridor_count);
        assert_eq!(stats.floor_cells, dungeon.grid.floor_count());
        assert_eq!(stats.regions, 1);
        assert!(stats.connected);
        assert_eq!(stats.overlapping_rooms, 0);
        assert!(stats.floor_ratio() > 0.0 && stats.floor_ratio() < 1.0);
    }

    // Tests a roomless layout measures as empty but connected
    // Verified by treating zero rooms as disconnected
    #[test]
    fn test_measure_empty_layout() {
        let dungeon = DungeonGenerator::new(3).generate_dungeon(5, 5);
        let stats = LayoutStatistics::measure(3, &dungeon);

        assert_eq!(stats.room_count, 0);
        assert_eq!(stats.floor_cells, 0);
        assert_eq!(stats.regions, 0);
        assert!(stats.connected);
        assert!(stats.floor_ratio().abs() < f64::EPSILON);
    }

    // Tests overlap counting pairs each intersecting room once
    // Verified by counting a room against itself
    #[test]
    fn test_overlapping_room_pairs() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(3, 3, 4, 4);
        let c = Rect::new(10, 0, 4, 4);
        let touching = Rect::new(4, 0, 2, 2);

        assert_eq!(overlapping_room_pairs(&[]), 0);
        assert_eq!(overlapping_room_pairs(&[a]), 0);
        assert_eq!(overlapping_room_pairs(&[a, c, touching]), 0);
        assert_eq!(overlapping_room_pairs(&[a, b, c]), 1);
        assert_eq!(overlapping_room_pairs(&[a, b, b]), 3);
    }

    // Tests generated rooms never overlap across seeds
    // Verified by placing every room at the leaf origin
    #[test]
    fn test_generated_rooms_are_disjoint() {
        for seed in 0..16 {
            let dungeon = DungeonGenerator::new(seed).generate_dungeon(90, 70);
            assert_eq!(overlapping_room_pairs(&dungeon.rooms), 0, "seed {seed}");
        }
    }

    // Tests a zero-area layout has a zero floor ratio
    // Verified by dividing by the cell count unconditionally
    #[test]
    fn test_floor_ratio_zero_area() {
        let mut stats = layout(0, 0, 0, true);
        stats.width = 0;

        assert!(stats.floor_ratio().abs() < f64::EPSILON);
    }

    // Tests the summary line carries the key counts
    // Verified by omitting the region count
    #[test]
    fn test_layout_display() {
        let text = layout(9, 4, 25, true).to_string();

        assert_eq!(
            text,
            "seed 9: 10x10, 4 rooms in 4 leaves, 3 corridors, 25.0% floor, 1 region(s)"
        );
    }

    // Tests survey totals, extremes and failing seeds
    // Verified by overwriting the minimum with each new ratio
    #[test]
    fn test_survey_record() {
        let mut survey = SurveyStatistics::new();
        survey.record(&layout(1, 4, 20, true));
        survey.record(&layout(2, 0, 0, true));
        survey.record(&layout(3, 5, 40, false));
        let mut overlapping = layout(4, 2, 30, true);
        overlapping.overlapping_rooms = 1;
        survey.record(&overlapping);

        assert_eq!(survey.layouts, 4);
        assert_eq!(survey.total_rooms, 11);
        assert_eq!(survey.empty_seeds, vec![2]);
        assert_eq!(survey.disconnected_seeds, vec![3]);
        assert_eq!(survey.overlapping_seeds, vec![4]);
        assert_eq!(survey.min_floor_ratio, Some(0.0));
        assert_eq!(survey.max_floor_ratio, Some(0.4));
        assert!((survey.mean_floor_ratio() - 0.225).abs() < 1e-9);
        assert!((survey.mean_rooms() - 2.75).abs() < 1e-9);
    }

    // Tests an empty survey reports zeros rather than NaN
    // Verified by dividing by the layout count unconditionally
    #[test]
    fn test_empty_survey() {
        let survey = SurveyStatistics::default();

        assert!(survey.mean_floor_ratio().abs() < f64::EPSILON);
        assert!(survey.mean_rooms().abs() < f64::EPSILON);
        assert_eq!(survey.min_floor_ratio, None);
        assert_eq!(survey.spawn_count(), 0);
    }

    // Tests spawn outcomes are tallied per phase
    // Verified by counting every phase as a probe
    #[test]
    fn test_record_spawn() {
        let mut survey = SurveyStatistics::new();
        for phase in [
            SpawnPhase::Probe,
            SpawnPhase::Probe,
            SpawnPhase::Scan,
            SpawnPhase::Fallback,
        ] {
            survey.record_spawn(phase);
        }

        assert_eq!(survey.probe_spawns, 2);
        assert_eq!(survey.scan_spawns, 1);
        assert_eq!(survey.fallback_spawns, 1);
        assert_eq!(survey.spawn_count(), 4);
        assert!(
            survey
                .to_string()
                .ends_with("spawns: 2 probe, 1 scan, 1 fallback")
        );
    }

    // Tests the survey report lists one figure per line
    // Verified by joining the report onto a single line
    #[test]
    fn test_survey_display() {
        let mut survey = SurveyStatistics::new();
        survey.record(&layout(1, 2, 50, true));
        let text = survey.to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines.first(), Some(&"layouts: 1"));
        assert_eq!(lines.get(1), Some(&"mean rooms: 2.00"));
        assert_eq!(
            lines.get(2),
            Some(&"floor ratio: mean 50.0%, min 50.0%, max 50.0%")
        );
        assert_eq!(lines.get(3), Some(&"disconnected: 0"));
        assert_eq!(lines.get(4), Some(&"without rooms: 0"));
        assert_eq!(lines.get(5), Some(&"overlapping rooms: 0"));
    }
}
