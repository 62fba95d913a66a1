//! Integration tests for the cache model.

use trace_cache_sim::core::{AccessOutcome, CacheGeometry, CacheModel};

/// Two lines of two 4-byte blocks: 1 index bit, 2 offset bits, 29 tag bits.
fn two_way_geometry() -> CacheGeometry {
    CacheGeometry::new(32, 16, 2, 4).unwrap()
}

/// Tests that a new cache is empty.
#[test]
fn test_cache_creation() {
    let cache = CacheModel::new(&two_way_geometry());

    assert_eq!(cache.line_count(), 2);
    assert_eq!(cache.occupancy(), 0);
    for i in 0..2 {
        let line = cache.line(i).unwrap();
        assert_eq!(line.cursor(), 0);
        assert_eq!(line.blocks().len(), 2);
        assert!(line.blocks().iter().all(|b| !b.valid));
    }
    assert!(cache.line(2).is_none());
}

/// Tests miss then hit on the same tag.
#[test]
fn test_cache_access_hit() {
    let mut cache = CacheModel::new(&two_way_geometry());

    assert!(!cache.lookup_and_update(0, 0xA));
    assert!(cache.lookup_and_update(0, 0xA));
    assert!(cache.lookup_and_update(0, 0xA));
}

/// Tests miss, miss, hit: A is still resident after B fills the second way.
#[test]
fn test_cache_two_tags_then_hit() {
    let mut cache = CacheModel::new(&two_way_geometry());

    assert_eq!(cache.access(0, 0xA), AccessOutcome::Fill { way: 0 });
    assert_eq!(cache.access(0, 0xB), AccessOutcome::Fill { way: 1 });
    assert_eq!(cache.access(0, 0xA), AccessOutcome::Hit { way: 0 });
}

/// Tests that filling invalid blocks never moves the cursor.
#[test]
fn test_cache_fill_keeps_cursor() {
    let geometry = CacheGeometry::new(32, 8 * 64, 8, 64).unwrap();
    let mut cache = CacheModel::new(&geometry);

    for tag in 0..8 {
        assert_eq!(cache.access(0, tag), AccessOutcome::Fill { way: tag as usize });
        assert_eq!(cache.line(0).unwrap().cursor(), 0);
    }
    assert!(cache.line(0).unwrap().is_full());

    for tag in 0..8 {
        assert!(cache.lookup_and_update(0, tag));
    }
}

/// Tests round-robin eviction: C evicts A (cursor 0), then the cursor moves.
#[test]
fn test_cache_round_robin_eviction() {
    let mut cache = CacheModel::new(&two_way_geometry());

    cache.access(0, 0xA);
    cache.access(0, 0xB);
    assert_eq!(
        cache.access(0, 0xC),
        AccessOutcome::Evict { way: 0, victim: 0xA }
    );
    assert_eq!(cache.line(0).unwrap().cursor(), 1);

    assert!(cache.contains(0, 0xC));
    assert!(cache.contains(0, 0xB));
    assert!(!cache.contains(0, 0xA));

    assert!(cache.lookup_and_update(0, 0xC));
    assert_eq!(
        cache.access(0, 0xA),
        AccessOutcome::Evict { way: 1, victim: 0xB }
    );
    assert_eq!(cache.line(0).unwrap().cursor(), 0);
}

/// Tests that the cursor ignores recency: a hit does not protect a block.
#[test]
fn test_cache_eviction_ignores_recency() {
    let mut cache = CacheModel::new(&two_way_geometry());

    cache.access(0, 0xA);
    cache.access(0, 0xB);
    assert!(cache.lookup_and_update(0, 0xA));

    cache.access(0, 0xC);
    assert!(!cache.contains(0, 0xA));
}

/// Tests the cursor wraps modulo the associativity.
#[test]
fn test_cache_cursor_wraps() {
    let geometry = CacheGeometry::new(32, 4 * 4, 4, 4).unwrap();
    let mut cache = CacheModel::new(&geometry);

    for tag in 0..4 {
        cache.access(0, tag);
    }
    for (i, tag) in (100..109).enumerate() {
        let way = cache.line(0).unwrap().cursor();
        assert_eq!(way, i % 4);
        match cache.access(0, tag) {
            AccessOutcome::Evict { way: evicted, .. } => assert_eq!(evicted, way),
            other => panic!("expected eviction, got {:?}", other),
        }
        assert_eq!(cache.line(0).unwrap().cursor(), (i + 1) % 4);
    }
}

/// Tests that lines are independent.
#[test]
fn test_cache_lines_independent() {
    let mut cache = CacheModel::new(&two_way_geometry());

    cache.access(0, 0xA);
    cache.access(0, 0xB);
    cache.access(1, 0xA);
    cache.access(0, 0xC);

    assert!(cache.contains(1, 0xA));
    assert_eq!(cache.line(1).unwrap().cursor(), 0);
    assert_eq!(cache.line(1).unwrap().occupancy(), 1);
    assert!(!cache.lookup_and_update(1, 0xC));
}

/// Tests that reset invalidates everything and rewinds cursors.
#[test]
fn test_cache_reset() {
    let mut cache = CacheModel::new(&two_way_geometry());

    cache.access(0, 0xA);
    cache.access(0, 0xB);
    cache.access(0, 0xC);
    cache.access(1, 0xD);
    cache.reset();

    assert_eq!(cache.occupancy(), 0);
    assert_eq!(cache.line(0).unwrap().cursor(), 0);
    assert!(!cache.contains(0, 0xC));
    assert_eq!(cache.access(0, 0xC), AccessOutcome::Fill { way: 0 });
}

/// Tests a direct-mapped cache, where every conflict evicts way 0.
#[test]
fn test_cache_direct_mapped() {
    let geometry = CacheGeometry::new(32, 4 * 64, 1, 64).unwrap();
    let mut cache = CacheModel::new(&geometry);

    assert_eq!(cache.access(3, 0x1), AccessOutcome::Fill { way: 0 });
    assert_eq!(
        cache.access(3, 0x2),
        AccessOutcome::Evict { way: 0, victim: 0x1 }
    );
    assert_eq!(cache.line(3).unwrap().cursor(), 0);
    assert!(cache.lookup_and_update(3, 0x2));
}

/// Tests that an out-of-range line index panics.
#[test]
#[should_panic(expected = "out of range")]
fn test_cache_line_out_of_range() {
    let mut cache = CacheModel::new(&two_way_geometry());
    cache.access(2, 0xA);
}
