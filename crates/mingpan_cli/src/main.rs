use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use mingpan_base::ziwei::ziwei_layout;
use mingpan_base::{
    DayunDirection, Element, GanZhi, Gender, HeavenlyStem, all_ten_gods, bureau_for,
    current_cycle, dayun_cycles_from_age, hour_branch_from_clock, index_to_ganzhi, nayin, relation,
    ten_god, year_ganzhi,
};
use mingpan_chart::{BirthInput, ChartConfig, FullChart, full_chart};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mingpan", about = "BaZi and ZiWei chart calculator")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Debug-level logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    Forward,
    Backward,
}

impl From<DirectionArg> for DayunDirection {
    fn from(d: DirectionArg) -> Self {
        match d {
            DirectionArg::Forward => Self::Forward,
            DirectionArg::Backward => Self::Backward,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Self::Male,
            GenderArg::Female => Self::Female,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// GanZhi at a sexagenary index (wraps mod 60)
    Ganzhi {
        /// Sexagenary index
        #[arg(allow_hyphen_values = true)]
        index: i64,
    },
    /// Sexagenary index of a pillar
    Index {
        /// Pillar, e.g. 甲子 or jia-zi
        pillar: GanZhi,
    },
    /// Year pillar of a CE year (1984 = 甲子)
    Year {
        year: i32,
    },
    /// Wu Xing relation from one element to another
    Relation {
        /// Source element (木 or wood)
        from: Element,
        /// Target element
        to: Element,
    },
    /// Ten God of a target stem, or of all ten stems
    TenGod {
        /// Day stem
        day: HeavenlyStem,
        /// Target stem; all ten when omitted
        target: Option<HeavenlyStem>,
    },
    /// Na Yin and Five Elements Bureau of a pillar
    Bureau {
        pillar: GanZhi,
    },
    /// DaYun cycles from a month pillar
    Dayun {
        /// Month pillar
        month_pillar: GanZhi,
        /// Date the first cycle begins (YYYY-MM-DD)
        #[arg(long)]
        qiyun_date: NaiveDate,
        /// Age at the qiyun date
        #[arg(long, default_value = "0")]
        qiyun_age: u32,
        /// Walk direction; derived from --year-stem and --gender when omitted
        #[arg(long, value_enum)]
        direction: Option<DirectionArg>,
        /// Year stem for the direction rule
        #[arg(long)]
        year_stem: Option<HeavenlyStem>,
        /// Gender for the direction rule
        #[arg(long, value_enum)]
        gender: Option<GenderArg>,
        /// Number of cycles
        #[arg(long, default_value = "10")]
        count: usize,
        /// Report the cycle active on this date
        #[arg(long)]
        query: Option<NaiveDate>,
    },
    /// ZiWei palaces and stars
    Ziwei {
        /// Year stem
        #[arg(long)]
        year_stem: HeavenlyStem,
        /// Lunar month (1-12)
        #[arg(long)]
        month: u8,
        /// Lunar day (1-30)
        #[arg(long)]
        day: u8,
        /// Hour branch index (0-11, 子 = 0)
        #[arg(long, required_unless_present = "clock_hour")]
        hour: Option<u8>,
        /// Clock hour (0-23); 23:00 counts as 子
        #[arg(long, conflicts_with = "hour")]
        clock_hour: Option<u8>,
    },
    /// Full chart from a birth input JSON file
    Chart {
        /// Birth input JSON file
        #[arg(long)]
        input: PathBuf,
        /// Chart config JSON file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Overrides the config qiyun date
        #[arg(long)]
        qiyun_date: Option<NaiveDate>,
        /// Overrides the config qiyun age
        #[arg(long)]
        qiyun_age: Option<u32>,
        /// Overrides the config cycle count
        #[arg(long)]
        dayun_count: Option<usize>,
        /// Overrides the walk direction
        #[arg(long, value_enum)]
        direction: Option<DirectionArg>,
        /// Overrides the config query date
        #[arg(long)]
        query_date: Option<NaiveDate>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "mingpan=debug" } else { "mingpan=info" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
    );
    // stdout carries results only.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json = cli.json;

    match cli.command {
        Commands::Ganzhi { index } => {
            let gz = index_to_ganzhi(index);
            if json {
                print_json(&gz)?;
            } else {
                println!("{gz} (index {}) - {}", gz.index(), nayin(gz).chinese());
            }
        }

        Commands::Index { pillar } => {
            if json {
                print_json(&pillar.index())?;
            } else {
                println!("{pillar}: index {} (order {})", pillar.index(), pillar.index() + 1);
            }
        }

        Commands::Year { year } => {
            let (gz, order) = year_ganzhi(year);
            if json {
                print_json(&gz)?;
            } else {
                println!("{year}: {gz} (order {order})");
            }
        }

        Commands::Relation { from, to } => {
            let rel = relation(from, to);
            if json {
                print_json(&rel)?;
            } else {
                println!("{} -> {}: {}", from.symbol(), to.symbol(), rel.name());
            }
        }

        Commands::TenGod { day, target } => match target {
            Some(t) => {
                let god = ten_god(day, t);
                if json {
                    print_json(&god)?;
                } else {
                    println!("{day} -> {t}: {} ({})", god.chinese(), god.name());
                }
            }
            None => {
                let gods = all_ten_gods(day);
                if json {
                    print_json(&gods)?;
                } else {
                    for (stem, god) in gods {
                        println!("{stem}: {} ({})", god.chinese(), god.name());
                    }
                }
            }
        },

        Commands::Bureau { pillar } => {
            let sound = nayin(pillar);
            let bureau = bureau_for(pillar);
            if json {
                print_json(&(sound, bureau))?;
            } else {
                println!("{pillar}: {} / {}", sound.chinese(), bureau.chinese());
            }
        }

        Commands::Dayun {
            month_pillar,
            qiyun_date,
            qiyun_age,
            direction,
            year_stem,
            gender,
            count,
            query,
        } => {
            let direction = match (direction, year_stem, gender) {
                (Some(d), _, _) => DayunDirection::from(d),
                (None, Some(stem), Some(g)) => {
                    DayunDirection::for_birth(stem.polarity(), Gender::from(g))
                }
                _ => bail!("pass --direction, or both --year-stem and --gender"),
            };
            let cycles =
                dayun_cycles_from_age(month_pillar, qiyun_date, qiyun_age, direction, count)?;
            let current = query.and_then(|d| current_cycle(&cycles, d));
            if json {
                print_json(&cycles)?;
            } else {
                println!("Direction: {direction:?}");
                for c in &cycles {
                    let marker = if current == Some(c) { " *" } else { "" };
                    println!(
                        "{:>2}. {} age {}-{}  {} .. {}{marker}",
                        c.order, c.ganzhi, c.start_age, c.end_age, c.start_date, c.end_date
                    );
                }
                if query.is_some() && current.is_none() {
                    println!("No cycle active on the query date");
                }
            }
        }

        Commands::Ziwei {
            year_stem,
            month,
            day,
            hour,
            clock_hour,
        } => {
            let hour = match (hour, clock_hour) {
                (Some(h), _) => h,
                (None, Some(c)) => hour_branch_from_clock(c)?.index(),
                (None, None) => bail!("pass --hour or --clock-hour"),
            };
            let layout = ziwei_layout(year_stem, month, day, hour)?;
            if json {
                print_json(&layout)?;
            } else {
                println!(
                    "Life palace {} ({}), body palace {}, {}",
                    layout.life_palace.branch,
                    layout.life_ganzhi,
                    layout.body_palace.branch,
                    layout.bureau.chinese()
                );
                for p in &layout.palaces {
                    let stars: Vec<String> = p
                        .stars
                        .iter()
                        .map(|s| match s.transformation {
                            Some(t) => format!("{}{}", s.star.chinese(), t.chinese()),
                            None => s.star.chinese().to_string(),
                        })
                        .collect();
                    let body = if p.is_body_palace { " [身]" } else { "" };
                    println!(
                        "{:>2} {}{} {}{body}: {}",
                        p.position,
                        p.stem,
                        p.branch,
                        p.name.chinese(),
                        stars.join(" ")
                    );
                }
            }
        }

        Commands::Chart {
            input,
            config,
            qiyun_date,
            qiyun_age,
            dayun_count,
            direction,
            query_date,
        } => {
            let text = std::fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let birth: BirthInput = serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", input.display()))?;
            let mut cfg = match config {
                Some(path) => ChartConfig::load(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => ChartConfig::default(),
            };
            if qiyun_date.is_some() {
                cfg.qiyun_date = qiyun_date;
            }
            if let Some(age) = qiyun_age {
                cfg.qiyun_age = age;
            }
            if let Some(n) = dayun_count {
                cfg.dayun_count = n;
            }
            if let Some(d) = direction {
                cfg.dayun_direction = Some(d.into());
            }
            if query_date.is_some() {
                cfg.query_date = query_date;
            }
            tracing::info!(input = %input.display(), "computing chart");
            let chart = full_chart(&birth, &cfg)?;
            if json {
                print_json(&chart)?;
            } else {
                print_chart(&chart);
            }
        }
    }

    Ok(())
}

fn print_chart(chart: &FullChart) {
    let bazi = &chart.bazi;
    let p = &bazi.pillars;
    println!("Pillars: {} {} {} {}", p.year, p.month, p.day, p.hour);
    println!(
        "Ten Gods: year {} / month {} / hour {}",
        bazi.ten_gods.year.chinese(),
        bazi.ten_gods.month.chinese(),
        bazi.ten_gods.hour.chinese()
    );
    println!(
        "Na Yin: {} {} {} {}",
        bazi.nayin.year.chinese(),
        bazi.nayin.month.chinese(),
        bazi.nayin.day.chinese(),
        bazi.nayin.hour.chinese()
    );

    let zw = &chart.ziwei;
    println!(
        "Life palace {} ({}), body palace {} (position {}), {}",
        zw.life_palace.branch,
        zw.life_ganzhi,
        zw.body_palace.branch,
        zw.body_palace.position,
        zw.bureau.chinese()
    );
    for palace in &zw.palaces {
        let stars: Vec<&str> = palace.stars.iter().map(|s| s.star.chinese()).collect();
        println!(
            "  {}{} {}: {}",
            palace.stem,
            palace.branch,
            palace.name.chinese(),
            stars.join(" ")
        );
    }

    match &chart.fortune {
        Some(f) => {
            println!("DaYun ({:?}):", f.direction);
            for c in &f.cycles {
                let marker = if f.current.as_ref() == Some(c) { " *" } else { "" };
                println!("  {} age {}-{}{marker}", c.ganzhi, c.start_age, c.end_age);
            }
        }
        None => println!("DaYun: no qiyun date configured"),
    }
}
