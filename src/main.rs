use formica::solver::Solver;
use formica::utils::config::Arguments;
use formica::utils::yaml;

fn main() {
    let args: Arguments = argh::from_env();
    let mut config = yaml::load_config(&args.config);
    config.override_from_args(&args);

    let routemap = yaml::load_routes(&args.routes);
    let solver = Solver::new(routemap, config);

    solver.plan(args.from.as_deref(), args.to.as_deref())
        .expect("Failed to plan the best trail");
}
