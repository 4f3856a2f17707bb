//! Property tests: every fill map always covers exactly the product's areas

use std::collections::BTreeSet;

use kitstudio_configurator::{Configurator, NewLogo, NewText};
use kitstudio_core::{Area, AreaCatalog, ProductType, TextKind};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Switch(ProductType),
    Color(usize, u32),
    Link(usize, usize),
    Text(usize),
    Undo,
    Redo,
}

fn product() -> impl Strategy<Value = ProductType> {
    prop::sample::select(ProductType::ALL.to_vec())
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        product().prop_map(Step::Switch),
        (0usize..8, 0u32..0x100_0000).prop_map(|(a, c)| Step::Color(a, c)),
        (0usize..8, 0usize..8).prop_map(|(a, b)| Step::Link(a, b)),
        (0usize..8).prop_map(Step::Text),
        Just(Step::Undo),
        Just(Step::Redo),
    ]
}

fn area_at(engine: &Configurator, index: usize) -> Area {
    let areas = AreaCatalog::areas_for(engine.state().selected_product());
    areas[index % areas.len()].clone()
}

fn assert_area_sets(engine: &Configurator) {
    let expected: BTreeSet<Area> = AreaCatalog::areas_for(engine.state().selected_product())
        .into_iter()
        .collect();
    let state = engine.state();
    assert_eq!(state.fill_types().keys().cloned().collect::<BTreeSet<_>>(), expected);
    assert_eq!(state.colors().keys().cloned().collect::<BTreeSet<_>>(), expected);
    assert_eq!(state.patterns().keys().cloned().collect::<BTreeSet<_>>(), expected);
    assert_eq!(state.gradients().keys().cloned().collect::<BTreeSet<_>>(), expected);
}

proptest! {
    #[test]
    fn area_sets_match_product(steps in prop::collection::vec(step(), 1..40)) {
        let mut engine = Configurator::new();
        for step in steps {
            match step {
                Step::Switch(product) => engine.set_selected_product(product),
                Step::Color(a, c) => {
                    let area = area_at(&engine, a);
                    engine.set_color(area, &format!("#{:06x}", c)).unwrap();
                }
                Step::Link(a, b) => {
                    let (source, target) = (area_at(&engine, a), area_at(&engine, b));
                    engine.link_areas(source, [target]).unwrap();
                }
                Step::Text(a) => {
                    let area = area_at(&engine, a);
                    engine.add_text(NewText::new(TextKind::Name, "ANA", area)).unwrap();
                }
                Step::Undo => {
                    engine.undo();
                }
                Step::Redo => {
                    engine.redo();
                }
            }
            assert_area_sets(&engine);
            prop_assert!(engine.state().history().len() <= 50);
        }
    }

    #[test]
    fn rendered_decorations_use_active_areas(switches in prop::collection::vec(product(), 1..10)) {
        let mut engine = Configurator::new();
        for (i, product) in switches.into_iter().enumerate() {
            let area = area_at(&engine, i);
            engine.add_text(NewText::new(TextKind::Number, "1", area.clone())).unwrap();
            engine.add_logo(NewLogo::new("crest.svg", area)).unwrap();
            engine.set_selected_product(product);

            let render = engine.render_state();
            for text in &render.texts {
                prop_assert!(AreaCatalog::contains(product, text.area.as_str()));
            }
            for logo in &render.logos {
                prop_assert!(AreaCatalog::contains(product, logo.area.as_str()));
            }
        }
    }
}
