use anyhow::Result;
use clap::{Parser, ValueEnum};
use corridor_core::{
    record::BufferedRecorder, util::eval_with_recorder, DefaultEvaluator, Env as _,
    Evaluator as _, Policy,
};
use corridor_grid_env::{
    CorridorAct, CorridorObs, DoorCorridorAct, DoorCorridorConfig, DoorCorridorEnv,
    DoorCorridorObs, SpecialStateCorridorConfig, SpecialStateCorridorEnv,
};
use log::info;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Corridor,
    Circular,
    Door,
}

/// Run a random policy in a corridor environment
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Environment to run
    #[arg(value_enum, default_value_t = Kind::Corridor)]
    kind: Kind,

    /// Number of episodes
    #[arg(long, default_value_t = 5)]
    episodes: usize,

    /// Random seed of the environment and the policy
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// YAML file with the environment configuration
    #[arg(long)]
    config: Option<String>,

    /// Print the environment after every step of one episode
    #[arg(long, default_value_t = false)]
    render: bool,
}

struct RandomCorridorPolicy(fastrand::Rng);

impl Policy<SpecialStateCorridorEnv> for RandomCorridorPolicy {
    fn sample(&mut self, _: &CorridorObs) -> CorridorAct {
        CorridorAct::ALL[self.0.usize(..CorridorAct::ALL.len())]
    }
}

struct RandomDoorPolicy(fastrand::Rng);

impl Policy<DoorCorridorEnv> for RandomDoorPolicy {
    fn sample(&mut self, _: &DoorCorridorObs) -> DoorCorridorAct {
        DoorCorridorAct::ALL[self.0.usize(..DoorCorridorAct::ALL.len())]
    }
}

fn corridor_config(args: &Args) -> Result<SpecialStateCorridorConfig> {
    match (&args.config, args.kind) {
        (Some(path), _) => SpecialStateCorridorConfig::load(path),
        (None, Kind::Circular) => Ok(SpecialStateCorridorConfig::circular()),
        (None, _) => Ok(SpecialStateCorridorConfig::small()),
    }
}

fn door_config(args: &Args) -> Result<DoorCorridorConfig> {
    match &args.config {
        Some(path) => DoorCorridorConfig::load(path),
        None => Ok(DoorCorridorConfig::default()),
    }
}

fn run_corridor(args: &Args) -> Result<()> {
    let config = corridor_config(args)?;
    let mut policy = RandomCorridorPolicy(fastrand::Rng::with_seed(args.seed));

    if args.render {
        let mut env = SpecialStateCorridorEnv::build(&config, args.seed as i64)?;
        let (mut obs, _) = env.reset(None)?;
        println!("{}", env.render());
        loop {
            let act = policy.sample(&obs);
            let (step, _) = env.step(&act);
            println!("{} {}", act, env.render());
            if step.is_done() {
                break;
            }
            obs = step.obs;
        }
    }

    let mut env = SpecialStateCorridorEnv::build(&config, args.seed as i64)?;
    let mut recorder = BufferedRecorder::new();
    let returns = eval_with_recorder(&mut env, &mut policy, args.episodes, &mut recorder)?;
    info!("Returns: {:?}, {} steps recorded", returns, recorder.len());

    let record = DefaultEvaluator::<SpecialStateCorridorEnv>::new(&config, args.seed as i64, args.episodes)?
        .evaluate(&mut policy)?;
    info!("Average return: {}", record.get_scalar("Episode return")?);
    Ok(())
}

fn run_door(args: &Args) -> Result<()> {
    let config = door_config(args)?;
    let mut policy = RandomDoorPolicy(fastrand::Rng::with_seed(args.seed));

    if args.render {
        let mut env = DoorCorridorEnv::build(&config, args.seed as i64)?;
        let (mut obs, _) = env.reset(None)?;
        println!("{}\n", env.render());
        loop {
            let act = policy.sample(&obs);
            let (step, _) = env.step(&act);
            println!("{}\n{}\n\n{}\n", act, env.render(), env.render_view());
            if step.is_done() {
                break;
            }
            obs = step.obs;
        }
    }

    let record = DefaultEvaluator::<DoorCorridorEnv>::new(&config, args.seed as i64, args.episodes)?
        .evaluate(&mut policy)?;
    info!("Average return: {}", record.get_scalar("Episode return")?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match args.kind {
        Kind::Corridor | Kind::Circular => run_corridor(&args),
        Kind::Door => run_door(&args),
    }
}
