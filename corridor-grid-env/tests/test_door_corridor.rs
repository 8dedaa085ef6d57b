use anyhow::Result;
use corridor_core::{error::EnvError, DefaultEvaluator, Env as _, Evaluator as _, Policy};
use corridor_grid_env::{
    AgentDirection, Cell, DoorCorridorAct, DoorCorridorConfig, DoorCorridorEnv, DoorCorridorObs,
    ObjectKind,
};
use tempdir::TempDir;
use test_log::test;

const U: Cell = Cell::UNSEEN;
const W: Cell = Cell::open(ObjectKind::Wall);
const A: Cell = Cell::open(ObjectKind::Agent);
const D: Cell = Cell::CLOSED_DOOR;
const O: Cell = Cell::open(ObjectKind::Door);

fn rows(obs: &DoorCorridorObs) -> Vec<Vec<Cell>> {
    obs.image.rows().map(|r| r.to_vec()).collect()
}

// Every cell in the rows above `row` is unseen.
fn all_unseen_beyond(obs: &DoorCorridorObs, row: usize) -> bool {
    obs.image.rows().take(row).flatten().all(|&c| c == U)
}

/// Turns to the goal, then opens every door and walks through it.
struct DoorOpener;

impl Policy<DoorCorridorEnv> for DoorOpener {
    fn sample(&mut self, obs: &DoorCorridorObs) -> DoorCorridorAct {
        let size = obs.image.size();
        if obs.direction != AgentDirection::Right {
            DoorCorridorAct::TurnRight
        } else if obs.image.get(size / 2, size - 2) == Cell::CLOSED_DOOR {
            DoorCorridorAct::Toggle
        } else {
            DoorCorridorAct::MoveForward
        }
    }
}

#[test]
fn test_closed_door_occludes_until_toggled() -> Result<()> {
    let mut env = DoorCorridorEnv::build(&DoorCorridorConfig::default(), 0)?;
    env.reset(None)?;

    let (step, _) = env.step(&DoorCorridorAct::TurnRight);
    assert_eq!(step.obs.direction, AgentDirection::Right);
    assert_eq!(rows(&step.obs), vec![vec![U, U, U], vec![W, D, W], vec![W, A, W]]);

    // The far column of the grid is walls and a closed door, now in sight.
    let (step, _) = env.step(&DoorCorridorAct::Toggle);
    assert_eq!(rows(&step.obs), vec![vec![W, D, W], vec![W, O, W], vec![W, A, W]]);
    assert_eq!(env.agent_pos(), (1, 1));
    Ok(())
}

#[test]
fn test_wide_view_reveals_up_to_the_next_door() -> Result<()> {
    let config = DoorCorridorConfig::default().agent_view_size(5);
    let mut env = DoorCorridorEnv::build(&config, 0)?;
    env.step(&DoorCorridorAct::TurnRight);

    let obs = env.observation();
    assert_eq!(obs.image.get(2, 3), D);
    assert!(all_unseen_beyond(&obs, 3));

    let (step, _) = env.step(&DoorCorridorAct::Toggle);
    let view = &step.obs.image;
    assert_eq!(view.get(2, 3), O);
    assert_eq!(view.rows().nth(2).map(|r| r.to_vec()), Some(vec![U, W, D, W, U]));
    assert!(all_unseen_beyond(&step.obs, 2));
    Ok(())
}

#[test]
fn test_forward_cell_is_at_the_top_of_the_centre_column() -> Result<()> {
    let config = DoorCorridorConfig::default().corridor_length(6).agent_view_size(5);
    let mut env = DoorCorridorEnv::build(&config, 0)?;
    let mut policy = DoorOpener;

    for _ in 0..12 {
        for _ in 0..4 {
            let obs = env.observation();
            let (x, y) = env.agent_pos();
            let (dx, dy) = env.agent_dir().forward();
            let ahead = env
                .grid()
                .get(x as i64 + dx, y as i64 + dy)
                .unwrap_or(Cell::UNSEEN);
            assert_eq!(obs.image.get(2, 4), A);
            assert_eq!(obs.image.get(2, 3), ahead);
            env.step(&DoorCorridorAct::TurnLeft);
        }
        let act = policy.sample(&env.observation());
        env.step(&act);
    }
    Ok(())
}

#[test]
fn test_door_opener_reaches_the_goal() -> Result<()> {
    let mut env = DoorCorridorEnv::build(&DoorCorridorConfig::default(), 0)?;
    let mut policy = DoorOpener;
    let mut obs = env.reset(None)?.0;

    for i in 1..=8 {
        let act = policy.sample(&obs);
        let (step, record) = env.step(&act);
        assert_eq!(step.reward, -1.0);
        assert_eq!(step.is_terminated, i == 8);
        assert_eq!(step.info.action, act);
        assert_eq!(record.get_string("action")?, act.name());
        obs = step.obs;
    }
    assert_eq!(env.render(), "#######\n# ///>#\n#######");
    Ok(())
}

#[test]
fn test_evaluator_with_door_opener() -> Result<()> {
    let config = DoorCorridorConfig::default();
    let mut evaluator = DefaultEvaluator::<DoorCorridorEnv>::new(&config, 0, 3)?;
    let record = evaluator.evaluate(&mut DoorOpener)?;
    assert_eq!(record.get_scalar("Episode return")?, -8.0);
    Ok(())
}

#[test]
fn test_identical_configs_give_identical_observations() -> Result<()> {
    let config = DoorCorridorConfig::default().corridor_length(4);
    let mut env1 = DoorCorridorEnv::build(&config, 1)?;
    let mut env2 = DoorCorridorEnv::build(&config, 2)?;
    assert_eq!(env1.reset(None)?.0, env2.reset(Some(3))?.0);

    for ix in [1, 2, 3, 2, 2, 0, 3] {
        let (s1, _) = env1.step_index(ix)?;
        let (s2, _) = env2.step_index(ix)?;
        assert_eq!(s1.info, s2.info);
    }
    Ok(())
}

#[test]
fn test_invalid_inputs() -> Result<()> {
    let err = DoorCorridorEnv::build(&DoorCorridorConfig::default().agent_view_size(2), 0)
        .err()
        .unwrap();
    assert!(matches!(
        err.downcast_ref::<EnvError>(),
        Some(EnvError::ConfigurationError(_))
    ));

    let mut env = DoorCorridorEnv::build(&DoorCorridorConfig::default(), 0)?;
    let err = env.step_index(-1).err().unwrap();
    assert!(matches!(
        err.downcast_ref::<EnvError>(),
        Some(EnvError::InvalidAction(_))
    ));
    assert_eq!(env.step_count(), 0);
    Ok(())
}

#[test]
fn test_build_from_yaml() -> Result<()> {
    let dir = TempDir::new("door_corridor")?;
    let path = dir.path().join("env.yaml");
    std::fs::write(&path, "corridor_length: 3\nmax_steps: 10\n")?;

    let config = DoorCorridorConfig::load(&path)?;
    assert_eq!(config.agent_view_size, 3);
    let env = DoorCorridorEnv::build(&config, 0)?;
    assert_eq!(env.render(), "#####\n#^DG#\n#####");
    Ok(())
}
