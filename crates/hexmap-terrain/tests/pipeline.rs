//! End-to-end checks of the noise → classification → river pipeline.

use hexmap_terrain::{
    Biome, BiomeDef, BiomeTable, GridPos, MapParams, MapSession, NoiseField, RiverWalker,
    StepSelection, TerrainClassifier, TerrainGenerator, UnclassifiedPolicy, seed::stream_rng,
};

fn water_only() -> BiomeTable {
    BiomeTable::new(vec![BiomeDef::new(Biome::Water, 1.0, [0, 0, 255], 2..=4)]).unwrap()
}

fn three_rules() -> BiomeTable {
    BiomeTable::new(vec![
        BiomeDef::new(Biome::Water, 0.3, [0, 0, 255], 2..=4),
        BiomeDef::new(Biome::Plains, 0.7, [0, 255, 0], 6..=10),
        BiomeDef::new(Biome::Mountain, 1.0, [128, 128, 128], 20..=30),
    ])
    .unwrap()
}

#[test]
fn single_water_rule_classifies_everything_as_water() {
    let field = NoiseField::generate(4, 4, 42, 1).unwrap();
    let classifier = TerrainClassifier::new(water_only(), UnclassifiedPolicy::FallbackToLast);
    let grid = classifier.classify(&field).unwrap();
    assert_eq!(grid.len(), 16);
    assert!(grid.iter().all(|(_, b)| *b == Biome::Water));
}

#[test]
fn river_from_origin_terminates_within_cell_count() {
    for selection in [StepSelection::LowestCoordinate, StepSelection::LowestScore] {
        let walker = RiverWalker::new(4, 4, selection);
        let mut rng = stream_rng(42);
        let river = walker.walk(GridPos::new(0, 0), &mut rng);
        assert!(!river.is_empty());
        assert!(river.len() <= 16);
        assert_eq!(river.path(), &[GridPos::new(0, 0)]);
    }
}

#[test]
fn water_only_map_generates_one_river_per_cell() {
    let field = NoiseField::generate(4, 4, 42, 1).unwrap();
    let generator = TerrainGenerator::new(
        TerrainClassifier::new(water_only(), UnclassifiedPolicy::FallbackToLast),
        RiverWalker::new(4, 4, StepSelection::LowestCoordinate),
    );
    let terrain = generator.generate(&field, &mut stream_rng(42)).unwrap();
    assert_eq!(terrain.rivers().len(), 16);
    for river in terrain.rivers() {
        assert!(river.len() <= 16);
        assert!(river.is_connected());
    }
}

#[test]
fn classification_twice_on_same_noise_is_identical() {
    let field = NoiseField::generate(16, 16, 0xC0FFEE, 7).unwrap();
    let classifier = TerrainClassifier::new(three_rules(), UnclassifiedPolicy::FallbackToLast);
    let first = classifier.classify(&field).unwrap();
    let second = classifier.classify(&field).unwrap();
    assert_eq!(first, second);
}

#[test]
fn classification_matches_first_rule_semantics() {
    let table = three_rules();
    let field = NoiseField::generate(16, 16, 314, 9).unwrap();
    let classifier = TerrainClassifier::new(table.clone(), UnclassifiedPolicy::FallbackToLast);
    let grid = classifier.classify(&field).unwrap();
    for (pos, value) in field.iter() {
        let expected = table
            .rules()
            .iter()
            .find(|def| value < def.threshold)
            .map_or(Biome::Mountain, |def| def.biome);
        assert_eq!(*grid.get(pos), expected, "cell {pos} value {value}");
    }
}

#[test]
fn rivers_override_classification_and_stay_in_bounds() {
    let field = NoiseField::generate(16, 16, 8, 6).unwrap();
    for selection in [StepSelection::LowestCoordinate, StepSelection::LowestScore] {
        let generator = TerrainGenerator::new(
            TerrainClassifier::new(three_rules(), UnclassifiedPolicy::FallbackToLast),
            RiverWalker::new(16, 16, selection),
        );
        let terrain = generator.generate(&field, &mut stream_rng(77)).unwrap();
        for river in terrain.rivers() {
            assert!(river.is_connected());
            for &pos in river.path() {
                assert!(pos.x < 16 && pos.y < 16);
                assert_eq!(terrain.biome_at(pos), Biome::Water);
            }
        }
    }
}

#[test]
fn fixed_master_seed_reproduces_whole_session() {
    let params = || MapParams {
        width: 20,
        height: 12,
        master_seed: Some(2024),
        selection: StepSelection::LowestScore,
        ..Default::default()
    };
    let a = MapSession::generate(params()).unwrap();
    let b = MapSession::generate(params()).unwrap();
    assert_eq!(a.frequency(), b.frequency());
    assert_eq!(a.noise(), b.noise());
    assert_eq!(a.terrain(), b.terrain());
    assert_eq!(a.terrain().to_string(), b.terrain().to_string());
}
