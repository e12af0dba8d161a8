mod common;

mod tests {
    use myrtio_strip_animator::animation::{
        Animation, AnimationConfig, AnimationKind, AnimationRequest, AnimationSlot,
        AuroraAnimation, BreathingAnimation, ChaseAnimation, FireAnimation, LIGHTNING_HOLD,
        LightningAnimation, OceanAnimation, RainbowAnimation, SolidAnimation,
    };
    use myrtio_strip_animator::color::{OFF, WHITE};
    use myrtio_strip_animator::{Duration, Error, NUM_LEDS, Rgb, SplitMix64, hsv_to_rgb};

    use crate::common::SequenceRandom;

    const ALL_KINDS: [AnimationKind; 9] = [
        AnimationKind::None,
        AnimationKind::Rainbow,
        AnimationKind::Breathing,
        AnimationKind::Chase,
        AnimationKind::Fire,
        AnimationKind::Lightning,
        AnimationKind::Ocean,
        AnimationKind::Aurora,
        AnimationKind::SolidColor,
    ];

    fn config(kind: AnimationKind, color: Rgb) -> AnimationConfig {
        AnimationConfig {
            kind,
            speed_ms: 50,
            brightness: 255,
            color,
        }
    }

    fn render<A: Animation>(animation: &mut A, config: &AnimationConfig) -> [Rgb; NUM_LEDS] {
        let mut leds = [OFF; NUM_LEDS];
        animation.render(config, &mut SplitMix64::new(1), &mut leds);
        leds
    }

    #[test]
    fn test_kind_ids() {
        for (id, kind) in ALL_KINDS.iter().enumerate() {
            let id = u8::try_from(id).unwrap();
            assert_eq!(kind.as_raw(), id);
            assert_eq!(AnimationKind::from_raw(id), Some(*kind));
        }
        assert_eq!(AnimationKind::from_raw(9), None);
        assert_eq!(AnimationKind::from_raw(255), None);
    }

    #[test]
    fn test_kind_names() {
        let names = [
            "none",
            "rainbow",
            "breathing",
            "chase",
            "fire",
            "lightning",
            "ocean",
            "aurora",
            "solid_color",
        ];
        for (kind, name) in ALL_KINDS.iter().zip(names) {
            assert_eq!(kind.as_str(), name);
            assert_eq!(AnimationKind::parse_from_str(name), Some(*kind));
        }
        assert_eq!(AnimationKind::parse_from_str("strobe"), None);
        assert_eq!(AnimationKind::parse_from_str("Rainbow"), None);
    }

    #[test]
    fn test_slot_matches_kind() {
        for kind in ALL_KINDS {
            assert_eq!(kind.to_slot().kind(), kind);
        }
        assert_eq!(AnimationSlot::default().kind(), AnimationKind::None);
    }

    #[test]
    fn test_request_defaults() {
        let config = AnimationConfig::try_from(AnimationRequest::new(1)).unwrap();
        assert_eq!(config.kind, AnimationKind::Rainbow);
        assert_eq!(config.speed_ms, 50);
        assert_eq!(config.brightness, 100);
        assert_eq!(config.color, WHITE);
    }

    #[test]
    fn test_request_overrides() {
        let request = AnimationRequest {
            kind: 8,
            speed_ms: Some(20),
            brightness: Some(255),
            color: Some(Rgb::new(10, 20, 30)),
        };
        let config = AnimationConfig::try_from(request).unwrap();
        assert_eq!(config, config_for_solid());
        assert_eq!(config.speed(), Duration::from_millis(20));
    }

    fn config_for_solid() -> AnimationConfig {
        AnimationConfig {
            kind: AnimationKind::SolidColor,
            speed_ms: 20,
            brightness: 255,
            color: Rgb::new(10, 20, 30),
        }
    }

    #[test]
    fn test_request_unknown_kind() {
        assert_eq!(
            AnimationConfig::try_from(AnimationRequest::new(9)),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn test_default_config() {
        let config = AnimationConfig::default();
        assert_eq!(config.kind, AnimationKind::None);
        assert_eq!(config.speed_ms, 50);
        assert_eq!(config.brightness, 128);
        assert_eq!(config.color, WHITE);
    }

    #[test]
    fn test_solid_and_off() {
        let color = Rgb::new(10, 20, 30);
        let config = config(AnimationKind::SolidColor, color);

        assert_eq!(render(&mut SolidAnimation::configured(), &config), [color; NUM_LEDS]);
        assert_eq!(render(&mut SolidAnimation::off(), &config), [OFF; NUM_LEDS]);
    }

    #[test]
    fn test_chase_period() {
        let color = Rgb::new(0, 0, 200);
        let config = config(AnimationKind::Chase, color);
        let mut chase = ChaseAnimation::new();

        for step in 0..NUM_LEDS * 2 {
            let leds = render(&mut chase, &config);
            let lit = step % NUM_LEDS;
            for (i, led) in leds.iter().enumerate() {
                if i == lit {
                    assert_eq!(*led, color);
                } else {
                    assert_eq!(*led, OFF);
                }
            }
        }
        assert_eq!(chase.position(), 0);
    }

    #[test]
    fn test_breathing_bounds_and_direction() {
        let config = config(AnimationKind::Breathing, Rgb::new(200, 100, 50));
        let mut breathing = BreathingAnimation::new();

        // Starts at the top and turns around immediately
        let first = render(&mut breathing, &config);
        assert_eq!(breathing.level(), 100);
        assert!(!breathing.is_rising());
        assert_eq!(first[0], Rgb::new(200, 100, 50));

        let second = render(&mut breathing, &config);
        assert_eq!(breathing.level(), 99);
        assert_eq!(second[0], Rgb::new(198, 99, 49));

        for _ in 0..99 {
            render(&mut breathing, &config);
        }
        assert_eq!(breathing.level(), 0);
        assert!(breathing.is_rising());

        let leds = render(&mut breathing, &config);
        assert_eq!(breathing.level(), 1);
        assert_eq!(leds[0], Rgb::new(2, 1, 0));

        for _ in 0..500 {
            render(&mut breathing, &config);
            assert!((0.0..=1.0).contains(&breathing.amplitude()));
        }
    }

    #[test]
    fn test_rainbow_spread_and_wrap() {
        let config = AnimationConfig {
            brightness: 100,
            ..config(AnimationKind::Rainbow, WHITE)
        };
        let mut rainbow = RainbowAnimation::new();

        let leds = render(&mut rainbow, &config);
        for (i, led) in leds.iter().enumerate() {
            let hue = u16::try_from(i * 360 / NUM_LEDS).unwrap();
            assert_eq!(*led, hsv_to_rgb(hue, 100, 100));
        }
        assert_eq!(rainbow.hue(), 1);

        for _ in 1..360 {
            render(&mut rainbow, &config);
        }
        assert_eq!(rainbow.hue(), 0);
    }

    #[test]
    fn test_rainbow_value_clamped() {
        let bright = config(AnimationKind::Rainbow, WHITE);
        let leds = render(&mut RainbowAnimation::new(), &bright);
        assert_eq!(leds[0], Rgb::new(255, 0, 0));

        let dim = AnimationConfig {
            brightness: 50,
            ..bright
        };
        let leds = render(&mut RainbowAnimation::new(), &dim);
        assert_eq!(leds[0], Rgb::new(127, 0, 0));
    }

    #[test]
    fn test_fire_range() {
        let config = config(AnimationKind::Fire, WHITE);
        let mut rng = SplitMix64::new(7);
        let mut fire = FireAnimation;
        let mut leds = [OFF; NUM_LEDS];

        for _ in 0..200 {
            fire.render(&config, &mut rng, &mut leds);
            for led in leds {
                assert_eq!(led.r, 255);
                assert!((50..105).contains(&led.g));
                assert_eq!(led.b, 0);
            }
        }
    }

    #[test]
    fn test_fire_is_deterministic_per_seed() {
        let config = config(AnimationKind::Fire, WHITE);
        let mut first = [OFF; NUM_LEDS];
        let mut second = [OFF; NUM_LEDS];

        FireAnimation.render(&config, &mut SplitMix64::new(42), &mut first);
        FireAnimation.render(&config, &mut SplitMix64::new(42), &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_lightning_flash() {
        let config = config(AnimationKind::Lightning, WHITE);
        let mut rng = SequenceRandom::new(&[3, 0, 10, 54, 55, 1]);
        let mut lightning = LightningAnimation::new();
        let mut leds = [OFF; NUM_LEDS];

        lightning.render(&config, &mut rng, &mut leds);
        assert!(lightning.flashed());
        assert_eq!(lightning.hold(), LIGHTNING_HOLD);
        assert_eq!(lightning.hold(), Duration::from_millis(50));
        assert_eq!(leds[0], Rgb::new(200, 200, 255));
        assert_eq!(leds[1], Rgb::new(210, 210, 255));
        assert_eq!(leds[2], Rgb::new(254, 254, 255));
        assert_eq!(leds[3], Rgb::new(200, 200, 255));
        assert_eq!(leds[4], Rgb::new(201, 201, 255));
    }

    #[test]
    fn test_lightning_dark() {
        let config = config(AnimationKind::Lightning, WHITE);
        let mut rng = SequenceRandom::new(&[5, 99, 50]);
        let mut lightning = LightningAnimation::new();
        let mut leds = [WHITE; NUM_LEDS];

        for _ in 0..3 {
            lightning.render(&config, &mut rng, &mut leds);
            assert!(!lightning.flashed());
            assert_eq!(lightning.hold(), Duration::from_ticks(0));
            assert_eq!(leds, [OFF; NUM_LEDS]);
        }
    }

    #[test]
    fn test_lightning_hold_through_slot() {
        let config = config(AnimationKind::Lightning, WHITE);
        let mut slot = AnimationKind::Lightning.to_slot();
        let mut leds = [OFF; NUM_LEDS];

        slot.render(&config, &mut SequenceRandom::new(&[0]), &mut leds);
        assert_eq!(slot.hold(), LIGHTNING_HOLD);
        slot.reset();
        assert_eq!(slot.hold(), Duration::from_ticks(0));
    }

    #[test]
    fn test_ocean_range_and_time() {
        let config = config(AnimationKind::Ocean, WHITE);
        let mut ocean = OceanAnimation::new();

        for _ in 0..100 {
            let leds = render(&mut ocean, &config);
            for led in leds {
                assert_eq!(led.r, 0);
                assert!((50..=85).contains(&led.g));
                assert!((100..=170).contains(&led.b));
            }
        }
        assert!((ocean.time() - 5.0).abs() < 1e-3);

        ocean.reset();
        assert!(ocean.time().abs() < f32::EPSILON);
    }

    #[test]
    fn test_ocean_varies_along_strip() {
        let config = config(AnimationKind::Ocean, WHITE);
        let leds = render(&mut OceanAnimation::new(), &config);
        assert_ne!(leds[0], leds[NUM_LEDS - 1]);
    }

    #[test]
    fn test_aurora_range_and_time() {
        let config = config(AnimationKind::Aurora, WHITE);
        let mut aurora = AuroraAnimation::new();

        for _ in 0..100 {
            let leds = render(&mut aurora, &config);
            for led in leds {
                // Green dominates the curtain
                assert!(led.g >= led.r);
                assert!(led.g <= 204);
            }
        }
        assert!((aurora.time() - 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_slot_reset_restarts_phase() {
        let config = config(AnimationKind::Chase, WHITE);
        let mut slot = AnimationKind::Chase.to_slot();
        let mut leds = [OFF; NUM_LEDS];
        let mut rng = SplitMix64::new(3);

        slot.render(&config, &mut rng, &mut leds);
        slot.render(&config, &mut rng, &mut leds);
        assert_eq!(leds[1], WHITE);

        slot.reset();
        slot.render(&config, &mut rng, &mut leds);
        assert_eq!(leds[0], WHITE);
    }
}
