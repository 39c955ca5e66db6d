//! Variant shuffler.
//!
//! Every variant permutes the options of every question. Every variant except
//! the reference variant (index 0, "A") also permutes question order. The
//! correct answer is tracked by original option index, never by text, so
//! duplicate option texts cannot confuse the key.

use rand::Rng;
use tracing::debug;

use crate::variant_engine::{
    helpers::label_for,
    models::{AnswerKeyEntry, MasterQuestion, VariantOption, VariantQuestion},
    shuffle::{enumerate_shuffled, shuffle},
};

/// Build one variant of the master set.
///
/// `variant_index == 0` keeps master question order; higher indexes shuffle it.
pub fn build_variant<R: Rng + ?Sized>(
    master_set: &[MasterQuestion],
    variant_index: usize,
    rng: &mut R,
) -> Vec<VariantQuestion> {
    let mut order: Vec<&MasterQuestion> = master_set.iter().collect();
    if variant_index > 0 {
        shuffle(&mut order, rng);
    }

    order
        .into_iter()
        .map(|master| shuffle_question(master, rng))
        .collect()
}

/// Build `num_variants` independent variants, reference variant first.
pub fn build_all_variants<R: Rng + ?Sized>(
    master_set: &[MasterQuestion],
    num_variants: usize,
    rng: &mut R,
) -> Vec<Vec<VariantQuestion>> {
    (0..num_variants)
        .map(|variant_index| {
            let variant = build_variant(master_set, variant_index, rng);
            debug!(variant_index, questions = variant.len(), "variant built");
            variant
        })
        .collect()
}

fn shuffle_question<R: Rng + ?Sized>(master: &MasterQuestion, rng: &mut R) -> VariantQuestion {
    // Overwritten below: exactly one option carries `correct_index`.
    let mut correct_label = label_for(0);
    let options: Vec<VariantOption> = enumerate_shuffled(master.options(), rng)
        .into_iter()
        .enumerate()
        .map(|(position, (original_index, text))| {
            let label = label_for(position);
            let is_correct = original_index == master.correct_index();
            if is_correct {
                correct_label = label;
            }
            VariantOption { label, text: text.clone(), is_correct }
        })
        .collect();

    VariantQuestion {
        text: master.text().to_string(),
        options,
        master_reference: master.reference(),
        correct_label,
    }
}

/// Answer key of a built variant, numbered by position.
pub fn answer_key(variant: &[VariantQuestion]) -> Vec<AnswerKeyEntry> {
    variant
        .iter()
        .enumerate()
        .map(|(i, q)| AnswerKeyEntry {
            number: i + 1,
            master_reference: q.master_reference,
            correct_label: q.correct_label,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use crate::variant_engine::master_set::{build_master_set, RawQuestion};

    fn master(n: usize, k: usize) -> Vec<MasterQuestion> {
        let records = (0..n)
            .map(|i| RawQuestion {
                text: format!("Question {i}"),
                options: (0..k).map(|j| format!("q{i}-opt{j}")).collect(),
                correct_answer_index: (i % k) as i64,
            })
            .collect();
        build_master_set(k, records).unwrap()
    }

    #[test]
    fn reference_variant_keeps_question_order() {
        let set = master(8, 4);
        let mut rng = StdRng::seed_from_u64(3);
        let variant = build_variant(&set, 0, &mut rng);
        let refs: Vec<usize> = variant.iter().map(|q| q.master_reference).collect();
        assert_eq!(refs, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn reference_variant_still_shuffles_options() {
        // With 12 questions of 5 options the chance that no option list moves is negligible.
        let set = master(12, 5);
        let mut rng = StdRng::seed_from_u64(11);
        let variant = build_variant(&set, 0, &mut rng);
        let moved = variant.iter().zip(&set).any(|(vq, mq)| {
            vq.options.iter().map(|o| &o.text).ne(mq.options().iter())
        });
        assert!(moved, "no option order changed in the reference variant");
    }

    #[test]
    fn later_variants_shuffle_question_order() {
        let set = master(15, 3);
        let mut rng = StdRng::seed_from_u64(5);
        let variants = build_all_variants(&set, 4, &mut rng);
        let shuffled = variants[1..].iter().any(|v| {
            v.iter().map(|q| q.master_reference).ne(1..=15)
        });
        assert!(shuffled);
    }

    #[test]
    fn correct_label_tracks_correct_text() {
        let set = master(10, 6);
        let mut rng = StdRng::seed_from_u64(21);
        for variant in build_all_variants(&set, 3, &mut rng) {
            for q in &variant {
                let source = &set[q.master_reference - 1];
                let correct = q.correct_option().unwrap();
                assert_eq!(correct.label, q.correct_label);
                assert_eq!(correct.text, source.correct_text());
                assert_eq!(q.text, source.text());
            }
        }
    }

    #[test]
    fn labels_follow_position() {
        let set = master(3, 4);
        let mut rng = StdRng::seed_from_u64(8);
        for q in build_variant(&set, 1, &mut rng) {
            let labels: String = q.options.iter().map(|o| o.label).collect();
            assert_eq!(labels, "ABCD");
        }
    }

    #[test]
    fn duplicate_texts_resolve_by_original_index() {
        let set = build_master_set(3, vec![RawQuestion {
            text: "dup".to_string(),
            options: vec!["x".into(), "x".into(), "y".into()],
            correct_answer_index: 1,
        }])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..20 {
            let q = &build_variant(&set, 0, &mut rng)[0];
            assert_eq!(q.options.iter().filter(|o| o.is_correct).count(), 1);
            assert_eq!(q.correct_option().unwrap().text, "x");
        }
    }

    #[test]
    fn same_seed_same_variants() {
        let set = master(6, 4);
        let a = build_all_variants(&set, 3, &mut StdRng::seed_from_u64(1234));
        let b = build_all_variants(&set, 3, &mut StdRng::seed_from_u64(1234));
        assert_eq!(a, b);
    }

    #[test]
    fn answer_key_is_positional() {
        let set = master(4, 3);
        let mut rng = StdRng::seed_from_u64(9);
        let variant = build_variant(&set, 2, &mut rng);
        let key = answer_key(&variant);
        for (entry, q) in key.iter().zip(&variant) {
            assert_eq!(entry.master_reference, q.master_reference);
            assert_eq!(entry.correct_label, q.correct_label);
        }
        assert_eq!(key.iter().map(|e| e.number).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn every_correct_index_maps_to_its_label() {
        let options: Vec<String> = ["a", "b", "c", "d", "e", "f"].map(String::from).to_vec();
        for correct in 0..6 {
            let set = build_master_set(6, vec![RawQuestion {
                text: "pick".to_string(),
                options: options.clone(),
                correct_answer_index: correct,
            }])
            .unwrap();
            for seed in 0..10 {
                let q = &build_variant(&set, 0, &mut StdRng::seed_from_u64(seed))[0];
                let position = q.options.iter().position(|o| o.label == q.correct_label).unwrap();
                assert_eq!(q.options[position].text, options[correct as usize]);
                assert!(q.options[position].is_correct);
            }
        }
    }

    #[test]
    fn many_variants_build_with_debug_logging_enabled() {
        let set = master(3, 3);
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        let variants = tracing::subscriber::with_default(subscriber, || {
            build_all_variants(&set, 27, &mut StdRng::seed_from_u64(27))
        });
        assert_eq!(variants.len(), 27);
        for variant in &variants {
            assert_eq!(variant.len(), 3);
        }
    }

    #[test]
    fn empty_master_set_gives_empty_variants() {
        let mut rng = StdRng::seed_from_u64(0);
        let variants = build_all_variants(&[], 2, &mut rng);
        assert_eq!(variants, vec![Vec::<VariantQuestion>::new(), Vec::new()]);
    }
}
