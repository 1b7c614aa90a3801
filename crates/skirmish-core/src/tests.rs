#[cfg(test)]
mod tests {
    use glam::{vec2, Vec2};
    use std::f32::consts::{FRAC_PI_2, PI};

    use crate::commands::PlayerCommand;
    use crate::constants::{FIRE_INTERVAL_TICKS, TICK_RATE};
    use crate::enums::{BulletKind, UnitKind};
    use crate::events::SimEvent;
    use crate::input::InputState;
    use crate::state::GameStateSnapshot;
    use crate::types::{rotate, world_to_local, SimTime};

    /// Verify enums round-trip through serde_json.
    #[test]
    fn test_unit_kind_serde() {
        let json = serde_json::to_string(&UnitKind::Soldier).unwrap();
        let back: UnitKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, UnitKind::Soldier);
    }

    #[test]
    fn test_bullet_kind_serde() {
        let json = serde_json::to_string(&BulletKind::CannonBall).unwrap();
        let back: BulletKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BulletKind::CannonBall);
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::SetInput {
                player_id: 1,
                input: InputState {
                    move_forward: true,
                    aim: vec2(3.0, -2.0),
                    ..Default::default()
                },
            },
            PlayerCommand::SpawnUnit { player_id: 2 },
            PlayerCommand::RemovePlayer { player_id: 3 },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify SimEvent round-trips through serde.
    #[test]
    fn test_sim_event_serde() {
        let events = vec![
            SimEvent::UnitMoved {
                unit_id: 4,
                position: vec2(1.0, 2.0),
            },
            SimEvent::UnitRotated {
                unit_id: 4,
                rotation: 0.75,
            },
            SimEvent::UnitSpawned {
                unit_id: 5,
                player_id: 1,
                position: Vec2::ZERO,
            },
            SimEvent::UnitDamaged {
                unit_id: 5,
                amount: 10.0,
            },
            SimEvent::UnitDestroyed { unit_id: 5 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: SimEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    // ---- Geometry ----

    #[test]
    fn test_rotate_quarter_turn() {
        // +90° takes local +Y to world -X.
        let v = rotate(vec2(0.0, 1.0), FRAC_PI_2);
        assert!((v.x - (-1.0)).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);

        // Half turn negates.
        let w = rotate(vec2(1.0, 0.5), PI);
        assert!((w.x + 1.0).abs() < 1e-6);
        assert!((w.y + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_world_to_local_inverts_transform() {
        let origin = vec2(3.0, -4.0);
        let rotation = 0.6;
        let local = vec2(0.25, -0.4);

        let world = origin + rotate(local, rotation);
        let back = world_to_local(world, origin, rotation);
        assert!((back - local).length() < 1e-5);
    }

    // ---- Input ----

    #[test]
    fn test_move_intent_definition() {
        assert!(!InputState::default().has_move_intent());
        assert!(InputState {
            move_forward: true,
            ..Default::default()
        }
        .has_move_intent());
        // Canceling keys still count as intent.
        assert!(InputState {
            move_forward: true,
            move_backward: true,
            ..Default::default()
        }
        .has_move_intent());
        // Pure rotation is not move intent.
        assert!(!InputState {
            rotate_left: true,
            rotate_right: true,
            ..Default::default()
        }
        .has_move_intent());
    }

    // ---- Time ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_fire_interval_is_one_second() {
        assert_eq!(FIRE_INTERVAL_TICKS, TICK_RATE);
    }
}
