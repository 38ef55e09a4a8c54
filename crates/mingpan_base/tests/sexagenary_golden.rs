//! Golden values for the sexagenary codec, Na Yin and Ten Gods.

use mingpan_base::{
    ALL_BRANCHES, ALL_GANZHI, ALL_STEMS, ChartError, EarthlyBranch, Element, GanZhi, HeavenlyStem,
    TenGod, bureau_for, ganzhi_to_index, nayin, ten_god, year_ganzhi,
};

#[test]
fn year_pillars() {
    let cases = [
        (1900, "庚子", 37),
        (1984, "甲子", 1),
        (1990, "庚午", 7),
        (2000, "庚辰", 17),
        (2024, "甲辰", 41),
        (2043, "癸亥", 60),
        (2044, "甲子", 1),
    ];
    for (year, name, order) in cases {
        let (gz, o) = year_ganzhi(year);
        assert_eq!(gz.to_string(), name, "{year}");
        assert_eq!(o, order, "{year}");
    }
}

#[test]
fn every_pair_is_valid_or_rejected() {
    let mut valid = 0;
    for stem in ALL_STEMS {
        for branch in ALL_BRANCHES {
            match ganzhi_to_index(stem, branch) {
                Ok(n) => {
                    valid += 1;
                    assert_eq!(ALL_GANZHI[n as usize], GanZhi::new(stem, branch).unwrap());
                }
                Err(e) => assert_eq!(e, ChartError::InvalidGanZhi { stem, branch }),
            }
        }
    }
    assert_eq!(valid, 60);
}

#[test]
fn nayin_samples() {
    let cases = [
        ("甲子", "海中金", Element::Metal),
        ("丙寅", "爐中火", Element::Fire),
        ("戊辰", "大林木", Element::Wood),
        ("壬申", "劍鋒金", Element::Metal),
        ("丙子", "澗下水", Element::Water),
        ("戊寅", "城頭土", Element::Earth),
        ("壬午", "楊柳木", Element::Wood),
        ("甲辰", "覆燈火", Element::Fire),
        ("壬戌", "大海水", Element::Water),
    ];
    for (gz, name, element) in cases {
        let n = nayin(GanZhi::parse(gz).unwrap());
        assert_eq!(n.chinese(), name, "{gz}");
        assert_eq!(n.element(), element, "{gz}");
        assert_eq!(bureau_for(GanZhi::parse(gz).unwrap()).element(), element);
    }
}

#[test]
fn hidden_stem_main_qi_shares_branch_element() {
    for b in ALL_BRANCHES {
        let hidden = b.hidden_stems();
        assert!((1..=3).contains(&hidden.len()), "{b}");
        assert_eq!(hidden[0].element(), b.element(), "{b}");
    }
    assert_eq!(
        EarthlyBranch::Chou.hidden_stems(),
        [HeavenlyStem::Ji, HeavenlyStem::Gui, HeavenlyStem::Xin]
    );
}

#[test]
fn ten_gods_against_day_stem_geng() {
    let day = HeavenlyStem::Geng;
    let expected = [
        TenGod::PianCai,
        TenGod::ZhengCai,
        TenGod::QiSha,
        TenGod::ZhengGuan,
        TenGod::PianYin,
        TenGod::ZhengYin,
        TenGod::BiJian,
        TenGod::JieCai,
        TenGod::ShiShen,
        TenGod::ShangGuan,
    ];
    for (target, want) in ALL_STEMS.iter().zip(expected) {
        assert_eq!(ten_god(day, *target), want, "{target}");
    }
}
