use serde::Deserialize;
use argh::FromArgs;

/// An ant-colony optimiser for shortest tours over labelled route maps
#[derive(FromArgs)]
pub struct Arguments {
    #[argh(positional)]
    pub routes: String,
    /// path to configuration file
    #[argh(option, short='c', default="String::from(\"data/config/default.yaml\")")]
    pub config: String,
    /// fix the place the tour departs from
    #[argh(option, short='f')]
    pub from: Option<String>,
    /// fix the place the tour arrives at
    #[argh(option, short='t')]
    pub to: Option<String>,
    /// override random seed for the colony
    #[argh(option, short='s')]
    pub seed: Option<u64>,
    /// override ant count in each generation
    #[argh(option, short='a')]
    pub ants: Option<usize>,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub name: String,
    pub seed: u64,
    pub parameters: Parameters,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Parameters {
    pub alpha: f64,
    pub beta: f64,
    pub rho: f64,
    pub q: f64,
    pub ants: usize,
    pub cycles: u32,
}

impl Config {
    pub fn override_from_args(&mut self, args: &Arguments) {
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        if let Some(ants) = args.ants {
            self.parameters.ants = ants;
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            alpha: 3.0,
            beta: 2.0,
            rho: 0.01,  // 蒸發率
            q: 2.0,
            ants: 3,
            cycles: 1000,
        }
    }
}
