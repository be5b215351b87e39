use crate::db::entities::{Artist, Artwork, GalleryCategory, GalleryImage, ServiceKind};

pub fn filter_artists(
    artists: &[Artist],
    specialty: Option<&str>,
    kind: Option<ServiceKind>,
    query: &str,
) -> Vec<Artist> {
    let query = query.trim().to_lowercase();
    artists
        .iter()
        .filter(|artist| specialty.map_or(true, |s| artist.specialties.iter().any(|own| own == s)))
        .filter(|artist| kind.map_or(true, |k| artist.offers(k)))
        .filter(|artist| {
            query.is_empty()
                || artist.name.to_lowercase().contains(&query)
                || artist
                    .specialties
                    .iter()
                    .any(|s| s.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Every specialty across the roster, sorted and without duplicates.
pub fn specialties(artists: &[Artist]) -> Vec<String> {
    let mut all: Vec<String> = artists
        .iter()
        .flat_map(|artist| artist.specialties.iter().cloned())
        .collect();
    all.sort();
    all.dedup();
    all
}

pub fn featured_artists(artists: &[Artist], count: usize) -> Vec<Artist> {
    let mut sorted = artists.to_vec();
    sorted.sort_by(|a, b| {
        b.rating
            .total_cmp(&a.rating)
            .then_with(|| b.review_count.cmp(&a.review_count))
    });
    sorted.truncate(count);
    sorted
}

pub fn artwork_styles(artworks: &[Artwork]) -> Vec<String> {
    let mut styles: Vec<String> = artworks.iter().map(|a| a.style.clone()).collect();
    styles.sort();
    styles.dedup();
    styles
}

pub fn filter_artworks(artworks: &[Artwork], style: Option<&str>) -> Vec<Artwork> {
    artworks
        .iter()
        .filter(|artwork| style.map_or(true, |s| artwork.style == s))
        .cloned()
        .collect()
}

pub fn filter_gallery(images: &[GalleryImage], category: Option<GalleryCategory>) -> Vec<GalleryImage> {
    images
        .iter()
        .filter(|image| category.map_or(true, |c| image.category == c))
        .cloned()
        .collect()
}

/// Index into whatever list is currently on screen; `None` means closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    pub index: Option<usize>,
}

impl Lightbox {
    pub fn open(&mut self, index: usize, len: usize) {
        self.index = (index < len).then_some(index);
    }

    pub fn close(&mut self) {
        self.index = None;
    }

    pub fn is_open(&self) -> bool {
        self.index.is_some()
    }

    pub fn next(&mut self, len: usize) {
        if let Some(index) = self.index {
            self.index = (len > 0).then(|| (index + 1) % len);
        }
    }

    pub fn prev(&mut self, len: usize) {
        if let Some(index) = self.index {
            self.index = (len > 0).then(|| (index + len - 1) % len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::mock_data;

    #[test]
    fn test_filter_artists() {
        let artists = mock_data::artists();
        let piercers = filter_artists(&artists, None, Some(ServiceKind::Piercing), "");
        assert_eq!(piercers.iter().map(|a| a.id).collect::<Vec<_>>(), vec![5, 6]);

        let minimalist = filter_artists(&artists, Some("Minimalist"), Some(ServiceKind::Tattoo), "");
        assert_eq!(minimalist.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 6]);

        let by_query = filter_artists(&artists, None, None, "japan");
        assert_eq!(by_query.len(), 1);
        assert_eq!(by_query[0].name, "Kenji Mori");

        // Consultations are open to the whole roster
        assert_eq!(filter_artists(&artists, None, Some(ServiceKind::Consultation), "").len(), artists.len());
    }

    #[test]
    fn test_specialties_are_unique_and_sorted() {
        let all = specialties(&mock_data::artists());
        assert_eq!(all.first().map(String::as_str), Some("Black and Grey"));
        assert_eq!(all.iter().filter(|s| *s == "Minimalist").count(), 1);
        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted);
    }

    #[test]
    fn test_featured_artists() {
        let featured = featured_artists(&mock_data::artists(), 3);
        assert_eq!(featured.iter().map(|a| a.id).collect::<Vec<_>>(), vec![5, 1, 2]);
    }

    #[test]
    fn test_filter_artworks_and_gallery() {
        let artworks = mock_data::artworks();
        let mara: Vec<Artwork> = artworks.into_iter().filter(|a| a.artist_id == 1).collect();
        assert_eq!(artwork_styles(&mara), vec!["Botanical", "Fine Line", "Minimalist"]);
        assert_eq!(filter_artworks(&mara, Some("Botanical")).len(), 1);
        assert_eq!(filter_artworks(&mara, None).len(), 3);

        let gallery = mock_data::gallery();
        assert_eq!(filter_gallery(&gallery, Some(GalleryCategory::Studio)).len(), 3);
        assert_eq!(filter_gallery(&gallery, None).len(), gallery.len());
    }

    #[test]
    fn test_lightbox_wraps() {
        let mut lightbox = Lightbox::default();
        lightbox.next(3);
        assert!(!lightbox.is_open());

        lightbox.open(5, 3);
        assert!(!lightbox.is_open());

        lightbox.open(2, 3);
        lightbox.next(3);
        assert_eq!(lightbox.index, Some(0));
        lightbox.prev(3);
        assert_eq!(lightbox.index, Some(2));
        lightbox.close();
        assert_eq!(lightbox.index, None);
    }
}
