//! Built-in vocabulary tables.
//!
//! The tables are plain static data: nothing writes to them after the program
//! starts, so they are shared by reference across every generated record.
//! Reordering or editing an entry changes every record drawn from a given seed.

use crate::error::GeneratorError;

/// First names, including a few non-Latin entries.
pub static FIRST_NAMES: &[&str] = &[
    "伟", "Анастасия", "Александр", "الکساندر", "James", "Mary", "Robert", "Patricia", "John",
    "Jennifer", "Michael", "Linda", "David", "Elizabeth", "William", "Barbara", "Richard",
    "Susan", "Joseph", "Jessica", "Thomas", "Sarah", "Charles", "Karen", "Christopher", "Lisa",
    "Daniel", "Nancy", "Matthew", "Betty", "Anthony", "Margaret", "Mark", "Sandra", "Donald",
    "Ashley", "Steven", "Kimberly", "Paul", "Emily", "Andrew", "Donna", "Joshua", "Michelle",
    "Kenneth", "Carol", "Kevin", "Amanda", "Brian", "Dorothy", "George", "Melissa", "Timothy",
    "Deborah", "Ronald", "Stephanie", "Edward", "Rebecca", "Jason", "Sharon", "Jeffrey",
    "Laura", "Ryan", "Cynthia", "Jacob", "Kathleen", "Gary", "Amy", "Nicholas", "Angela",
    "Eric", "Shirley", "Jonathan", "Anna", "Stephen", "Brenda", "Larry", "Pamela", "Justin",
    "Emma", "Scott", "Nicole", "Brandon", "Helen", "Benjamin", "Samantha", "Samuel",
    "Katherine", "Gregory", "Christine", "Alexander", "Debra", "Frank", "Rachel", "Patrick",
    "Carolyn", "Raymond", "Janet", "Jack", "Catherine", "Dennis", "Maria", "Jerry", "Heather",
    "Tyler", "Diane", "Aaron", "Ruth", "Jose", "Julie", "Adam", "Olivia", "Nathan", "Joyce",
    "Henry", "Virginia", "Douglas", "Victoria", "Zachary", "Kelly", "Peter", "Lauren", "Kyle",
    "Christina", "Ethan", "Joan", "Walter", "Evelyn", "Noah", "Judith", "Jeremy", "Megan",
    "Christian", "Andrea", "Keith", "Cheryl", "Roger", "Hannah", "Terry", "Jacqueline",
    "Gerald", "Martha", "Harold", "Gloria", "Sean", "Teresa", "Austin", "Ann", "Carl", "Sara",
    "Arthur", "Madison", "Lawrence", "Frances", "Dylan", "Kathryn", "Jesse", "Janice", "Jordan",
    "Jean", "Bryan", "Abigail", "Billy", "Alice", "Joe", "Julia", "Bruce", "Judy", "Gabriel",
    "Sophia", "Logan", "Grace", "Albert", "Denise", "Willie", "Amber", "Alan", "Doris", "Juan",
    "Marilyn", "Wayne", "Danielle", "Elijah", "Beverly", "Randy", "Isabella", "Roy", "Theresa",
    "Vincent", "Diana", "Ralph", "Natalie", "Eugene", "Brittany", "Russell", "Charlotte",
    "Bobby", "Marie", "Mason", "Kayla", "Philip", "Alexis", "Louis", "Lori",
];

/// Last names.
pub static LAST_NAMES: &[&str] = &[
    "张", "அலெக்சாண்டர்", "Abraham", "Allan", "Alsop", "Anderson", "Arnold", "Avery", "Bailey",
    "Baker", "Ball", "Bell", "Berry", "Black", "Blake", "Bond", "Bower", "Brown", "Buckland",
    "Burgess", "Butler", "Cameron", "Campbell", "Carr", "Chapman", "Churchill", "Clark",
    "Clarkson", "Coleman", "Cornish", "Davidson", "Davies", "Dickens", "Dowd", "Duncan", "Dyer",
    "Edmunds", "Ellison", "Ferguson", "Fisher", "Forsyth", "Fraser", "Gibson", "Gill", "Glover",
    "Graham", "Grant", "Gray", "Greene", "Hamilton", "Hardacre", "Harris", "Hart", "Hemmings",
    "Henderson", "Hill", "Hodges", "Howard", "Hudson", "Hughes", "Hunter", "Ince", "Jackson",
    "James", "Johnston", "Jones", "Kelly", "Kerr", "King", "Knox", "Lambert", "Langdon",
    "Lawrence", "Lee", "Lewis", "Lyman", "MacDonald", "Mackay", "Mackenzie", "MacLeod",
    "Manning", "Marshall", "Martin", "Mathis", "May", "McDonald", "McLean", "McGrath",
    "Metcalfe", "Miller", "Mills", "Mitchell", "Morgan", "Morrison", "Murray", "Nash", "Newman",
    "Nolan", "North", "Ogden", "Oliver", "Paige", "Parr", "Parsons", "Paterson", "Payne",
    "Peake", "Peters", "Piper", "Poole", "Powell", "Pullman", "Quinn", "Rampling", "Randall",
    "Rees", "Reid", "Roberts", "Robertson", "Ross", "Russell", "Rutherford", "Sanderson",
    "Scott", "Sharp", "Short", "Simpson", "Skinner", "Slater", "Smith", "Springer", "Stewart",
    "Sutherland", "Taylor", "Terry", "Thomson", "Tucker", "Turner", "Underwood", "Vance",
    "Vaughan", "Walker", "Wallace", "Walsh", "Watson", "Welch", "White", "Wilkins", "Wilson",
    "Wright", "Young",
];

/// City names.
pub static CITIES: &[&str] = &[
    "Bladensburg", "Brambleton", "Edenburg", "Dubois", "Cotopaxi", "Sperryville",
    "Alleghenyville", "Westboro", "Tonopah", "Fowlerville", "Venice", "Wanship", "Diaperville",
    "Haring", "Morriston", "Kenvil", "Dahlen", "Canby", "Basye", "Marienthal", "Sutton",
    "Elwood", "Tilleda", "Crenshaw", "Loveland", "Canoochee", "Newkirk", "National",
    "Chesterfield", "Draper", "Turah", "Hall", "Dragoon", "Summertown", "Sims", "Guthrie",
    "Vivian", "Tuttle", "Ladera", "Drummond", "Ezel", "Marne", "Lookingglass", "Shasta",
    "Vandiver", "Sharon", "Glendale", "Loomis", "Statenville", "Gouglersville", "Sehili",
    "Catherine", "Whitmer", "Grimsley", "Salix", "Kersey", "Springdale", "Thermal", "Witmer",
    "Virgie", "Wakulla", "Indio", "Unionville", "Loretto", "Sabillasville", "Gracey",
    "Blodgett", "Aguila", "Harleigh", "Avalon", "Fairview", "Esmont", "Cascades", "Cleary",
    "Reno", "Holtville", "Lumberton", "Keller", "Caspar", "Biddle", "Dexter", "Whitehaven",
    "Fidelis", "Drytown", "Dorneyville", "Rivereno", "Independence", "Bodega", "Wanamie",
    "Townsend", "Caron", "Guilford", "Gallina", "Manila", "Itmann", "Whitewater", "Templeton",
    "Jessie", "Sena", "Charco", "Jamestown", "Imperial", "Vincent", "Nelson", "Abrams",
    "Glasgow", "Lynn", "Sugartown", "Navarre", "Marion", "Sanders", "Spelter", "Santel",
    "Outlook", "Ypsilanti", "Dotsero", "Mathews", "Loyalhanna", "Libertytown", "Terlingua",
    "Hackneyville", "Driftwood", "Stockdale", "Bynum", "Harrison", "Morningside", "Churchill",
    "Gambrills", "Brule", "Fairhaven", "Hinsdale", "Babb", "Buxton", "Biehle", "Catharine",
    "Dunbar", "Klagetoh", "Blandburg", "Roberts", "Romeville", "Hachita", "Leming", "Saranap",
    "Elliott", "Ronco", "Rossmore", "Bowie", "Roderfield", "Devon", "Trucksville", "Ribera",
    "Watchtower", "Orason", "Haena", "Fruitdale", "Riceville", "Urbana", "Moscow", "Fulford",
    "Cassel", "Shawmut", "Corinne", "Edmund", "Naomi", "Clara", "Duryea", "Chloride", "Axis",
    "Villarreal", "Talpa", "Rodman", "Goochland", "Deercroft", "Jacksonburg", "Kanauga",
    "Springville", "Concho", "Matheny", "Temperanceville", "Salunga", "Elfrida", "Stollings",
    "Lindisfarne", "Kimmell", "Fillmore", "Belmont", "Mansfield", "Fairforest", "Finzel",
    "Shelby", "Brenton", "Fairlee", "Brownlee", "Yettem", "Richmond", "Jeff", "Umapine",
    "Cuylerville", "Carbonville", "Alamo",
];

/// The three tables a [`CorpusGenerator`](crate::CorpusGenerator) draws from.
///
/// A `Vocabulary` only borrows its tables, so copying it is cheap and the
/// built-in one costs nothing to hand around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary<'v> {
    pub first_names: &'v [&'v str],
    pub last_names: &'v [&'v str],
    pub cities: &'v [&'v str],
}

impl Vocabulary<'static> {
    /// The built-in tables.
    pub fn builtin() -> Self {
        Self {
            first_names: FIRST_NAMES,
            last_names: LAST_NAMES,
            cities: CITIES,
        }
    }
}

impl Default for Vocabulary<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'v> Vocabulary<'v> {
    /// Build a vocabulary from caller-supplied tables.
    pub fn new(first_names: &'v [&'v str], last_names: &'v [&'v str], cities: &'v [&'v str]) -> Self {
        Self {
            first_names,
            last_names,
            cities,
        }
    }

    /// Reject empty tables; drawing from one would have no valid index.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        for (table, entries) in [
            ("first_names", self.first_names),
            ("last_names", self.last_names),
            ("cities", self.cities),
        ] {
            if entries.is_empty() {
                return Err(GeneratorError::EmptyVocabulary(table));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_sizes() {
        let vocabulary = Vocabulary::builtin();
        assert_eq!(vocabulary.first_names.len(), 204);
        assert_eq!(vocabulary.last_names.len(), 151);
        assert_eq!(vocabulary.cities.len(), 200);
        assert!(vocabulary.validate().is_ok());
    }

    #[test]
    fn test_builtin_tables_keep_non_latin_entries() {
        assert_eq!(FIRST_NAMES[0], "伟");
        assert_eq!(LAST_NAMES[1], "அலெக்சாண்டர்");
    }

    #[test]
    fn test_empty_table_rejected() {
        let vocabulary = Vocabulary::new(&["Ada"], &[], &["Venice"]);
        let err = vocabulary.validate().unwrap_err();
        assert!(matches!(err, GeneratorError::EmptyVocabulary("last_names")));
    }
}
