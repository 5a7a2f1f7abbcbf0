use graticule::viewport::visible_extent;
use graticule::{
    AngularExtent, BoundsRounding, Graticule, GraticuleConfig, GridAxis, LineColor, SpacingTable,
    build,
};

fn assert_close(a: f64, b: f64, eps: f64) {
    let diff = (a - b).abs();
    assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
}

#[test]
fn twenty_degree_window_around_null_island() {
    let extent = AngularExtent::from_degrees(-10.0, -10.0, 10.0, 10.0);
    let result = build(&extent);

    assert_close(result.spacing.lat, 5f64.to_radians(), 1e-15);
    assert_close(result.spacing.lon, 5f64.to_radians(), 1e-15);

    let bounds = result.bounds.expect("bounds");
    assert!(bounds.min_lon <= extent.west && bounds.max_lon >= extent.east);
    assert!(bounds.min_lat <= extent.south && bounds.max_lat >= extent.north);

    let equator = result
        .parallels
        .iter()
        .find(|l| l.label_text == "Equator")
        .expect("equator");
    assert_eq!(equator.color, LineColor::Highlight);

    let prime = result
        .meridians
        .iter()
        .find(|l| l.label_text == "Prime Meridian")
        .expect("prime meridian");
    assert_eq!(prime.color, LineColor::Highlight);

    assert!(result.meridians.iter().any(|l| l.label_text == "5°W"));
    assert!(result.parallels.iter().any(|l| l.label_text == "10°S"));
    assert!(
        result
            .parallels
            .iter()
            .filter(|l| l.label_text != "Equator")
            .all(|l| l.color == LineColor::Muted)
    );
}

#[test]
fn full_sphere_fallback_uses_coarsest_spacing() {
    let result = build(&AngularExtent::full_sphere());
    let coarsest = SpacingTable::STANDARD.coarsest_rad();
    assert_eq!(result.spacing.lat, coarsest);
    assert_eq!(result.spacing.lon, coarsest);
    assert_eq!(result.meridians.len(), 35);
    assert_eq!(result.parallels.len(), 18);
}

#[test]
fn meridians_never_duplicate_the_antimeridian() {
    let extents = [
        AngularExtent::full_sphere(),
        AngularExtent::from_degrees(150.0, -20.0, 180.0, 20.0),
        AngularExtent::from_degrees(-180.0, -5.0, -170.0, 5.0),
        AngularExtent::from_degrees(179.0, 0.0, 180.0, 1.0),
    ];
    for extent in extents {
        let result = build(&extent);
        assert!(result.meridians.iter().all(|l| l.label_text != "180°W"));
        assert!(result.meridians.iter().all(|l| l.axis == GridAxis::Meridian));
    }
}

#[test]
fn grid_covers_extent_for_many_windows() {
    let g = Graticule::default();
    for (w, s, size) in [
        (-170.0, -80.0, 0.2),
        (-45.5, 10.25, 3.0),
        (0.0, 0.0, 0.01),
        (12.34, -56.78, 40.0),
        (100.0, 10.0, 75.0),
    ] {
        let extent = AngularExtent::from_degrees(w, s, w + size, s + size);
        let result = g.build(&extent);
        let b = result.bounds.expect("bounds");
        assert!(b.min_lon <= extent.west, "{extent:?}");
        assert!(b.max_lon >= extent.east, "{extent:?}");
        assert!(b.min_lat <= extent.south, "{extent:?}");
        assert!(b.max_lat >= extent.north, "{extent:?}");
        assert!(!result.meridians.is_empty());
        assert!(!result.parallels.is_empty());
    }
}

#[test]
fn legacy_bounds_are_selectable() {
    let config = GraticuleConfig {
        bounds: BoundsRounding::Legacy,
        ..GraticuleConfig::default()
    };
    let legacy = Graticule::new(&config).expect("valid");
    let extent = AngularExtent::from_degrees(-1.0, -30.0, 1.0, 30.0);
    let matched = build(&extent).bounds.expect("bounds");
    let literal = legacy.build(&extent).bounds.expect("bounds");
    assert!(literal.max_lon < matched.max_lon);
}

#[test]
fn viewport_corners_feed_the_builder() {
    use foundation::math::{LonLat, geodetic_to_ecef};
    use graticule::viewport::Ray;

    let ray_toward = |p: LonLat| {
        let surface = geodetic_to_ecef(p.on_surface()).to_vec3();
        Ray::new(surface * 2.0, surface * -1.0)
    };
    let corners = [
        LonLat::from_degrees(-10.0, 10.0),
        LonLat::from_degrees(10.0, 10.0),
        LonLat::from_degrees(-10.0, -10.0),
        LonLat::from_degrees(10.0, -10.0),
    ];
    let result = build(&visible_extent(corners.map(ray_toward)));
    assert_close(result.spacing.lon, 5f64.to_radians(), 1e-15);
    assert!(result.lines().any(|l| l.label_text == "Equator"));
}
