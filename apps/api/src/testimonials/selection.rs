//! Export selection as set membership keyed by testimonial id.

use std::collections::BTreeSet;

use crate::testimonials::models::Testimonial;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<u32>,
}

impl Selection {
    pub fn new(ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Selected ids in ascending order.
    pub fn ids(&self) -> Vec<u32> {
        self.ids.iter().copied().collect()
    }

    /// Flips a single id.
    pub fn toggle(&mut self, id: u32) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// True when the view is non-empty and every item in it is selected.
    pub fn all_selected(&self, view: &[&Testimonial]) -> bool {
        !view.is_empty() && view.iter().all(|t| self.contains(t.id))
    }

    /// "Select all" over the current filtered view: deselects exactly the view's
    /// ids when all are already selected, otherwise selects all of them.
    /// Ids outside the view are left alone.
    pub fn toggle_all(&mut self, view: &[&Testimonial]) {
        if self.all_selected(view) {
            for t in view {
                self.ids.remove(&t.id);
            }
        } else {
            self.ids.extend(view.iter().map(|t| t.id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testimonials::dataset::sample_testimonials;
    use crate::testimonials::filter::TestimonialFilter;

    fn finance_view() -> Vec<&'static Testimonial> {
        TestimonialFilter {
            industry: "Finance".to_string(),
            ..Default::default()
        }
        .apply(sample_testimonials())
    }

    #[test]
    fn test_toggle_single_id() {
        let mut selection = Selection::default();
        selection.toggle(3);
        assert!(selection.contains(3));
        selection.toggle(3);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_selects_exactly_the_view() {
        let view = finance_view();
        let mut selection = Selection::default();
        selection.toggle_all(&view);
        assert_eq!(selection.ids(), vec![3, 5]);
        assert_eq!(selection.len(), view.len());
    }

    #[test]
    fn test_toggle_all_twice_leaves_outside_ids_untouched() {
        let view = finance_view();
        let mut selection = Selection::new([1, 6]);

        selection.toggle_all(&view);
        assert_eq!(selection.ids(), vec![1, 3, 5, 6]);

        selection.toggle_all(&view);
        assert_eq!(selection.ids(), vec![1, 6]);
    }

    #[test]
    fn test_toggle_all_with_partial_selection_completes_it() {
        let view = finance_view();
        let mut selection = Selection::new([5]);
        assert!(!selection.all_selected(&view));
        selection.toggle_all(&view);
        assert_eq!(selection.ids(), vec![3, 5]);
        assert!(selection.all_selected(&view));
    }

    #[test]
    fn test_toggle_all_on_empty_view_is_noop() {
        let mut selection = Selection::new([2]);
        selection.toggle_all(&[]);
        assert_eq!(selection.ids(), vec![2]);
        assert!(!selection.all_selected(&[]));
    }
}
