//! Human-readable full-unit dump: weights, armor and critical slots

use crate::cache::CachedUnitState;
use crate::core::config::VerifierConfig;
use crate::unit::design::CriticalSlot;
use crate::unit::mech::Mech;

use super::{WeightBreakdown, WeightValidator};

/// Render the whole unit the way a record sheet lists it
pub fn full_report(mech: &Mech<'_>, config: &VerifierConfig) -> String {
    let design = mech.design();
    let cache = CachedUnitState::new(mech);
    let width = config.print_label_width;
    let mut s = String::new();

    for line in WeightValidator::header(mech, &cache) {
        s.push_str(&format!("{}\n", line));
    }
    s.push('\n');

    for line in WeightBreakdown::compute(mech, config).lines(width) {
        s.push_str(&format!("{}\n", line));
    }
    s.push('\n');

    s.push_str(&format!(
        "{:<width$}{:>8}{:>8}{:>10}\n",
        "Armor", "Front", "Rear", "Internal"
    ));
    for data in &design.locations {
        let name = design.chassis.location_name(data.location);
        let rear = if data.location.is_torso() {
            data.rear_armor.to_string()
        } else {
            "-".to_string()
        };
        s.push_str(&format!(
            "{:<width$}{:>8}{:>8}{:>10}\n",
            name,
            data.armor,
            rear,
            design.internal_points(data.location)
        ));
    }
    s.push_str(&format!(
        "{:<width$}{:>8}\n",
        format!("Total ({})", design.armor_type),
        design.total_armor_points()
    ));

    for data in &design.locations {
        s.push_str(&format!("\n{}:\n", design.chassis.location_name(data.location)));
        for (index, slot) in data.slots.iter().enumerate() {
            s.push_str(&format!("  {:>2}. {}\n", index + 1, slot_label(mech, slot)));
        }
    }

    let unallocated: Vec<&str> = mech
        .mounts()
        .iter()
        .filter(|mount| mount.location().is_none())
        .map(|mount| mount.name())
        .collect();
    if !unallocated.is_empty() {
        s.push_str("\nUnallocated:\n");
        for name in unallocated {
            s.push_str(&format!("  {}\n", name));
        }
    }

    s
}

fn slot_label(mech: &Mech<'_>, slot: &CriticalSlot) -> String {
    match slot {
        CriticalSlot::Empty => "-Empty-".to_string(),
        CriticalSlot::System { system, armored: true } => format!("{} (armored)", system),
        CriticalSlot::System { system, .. } => system.to_string(),
        CriticalSlot::Equipment { mount } => match mech.mount(*mount) {
            Some(resolved) if resolved.mount.rear => format!("{} (R)", resolved.name()),
            Some(resolved) => resolved.name().to_string(),
            None => format!("<missing {}>", mount),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::registry::EquipmentCatalog;
    use crate::unit::builder::DesignBuilder;
    use crate::unit::chassis::ChassisKind;
    use crate::unit::location::Location;

    #[test]
    fn test_printout_lists_weights_armor_and_slots() {
        let catalog = EquipmentCatalog::standard();
        let design = DesignBuilder::new("Printer", 50.0, ChassisKind::Biped)
            .armor_at(Location::CenterTorso, 20, 6)
            .mount("ISMediumLaser", Location::RightArm)
            .mount_internal("Heat Sink")
            .build(&catalog)
            .unwrap();
        let mech = Mech::resolve(&design, &catalog).unwrap();
        let text = full_report(&mech, &VerifierConfig::default());

        assert!(text.starts_with("Printer (50 t Biped)"));
        assert!(text.contains("Internal Structure"));
        assert!(text.contains("Center Torso"));
        assert!(text.contains("Medium Laser"));
        assert!(text.contains("Shoulder"));
        assert!(text.contains("Unallocated:\n  Heat Sink"));
    }
}
