use crate::base::Category;
use crate::base::Cents;
use crate::base::Kind;
use crate::base::Record;
use crate::base::Window;

#[derive(Debug, Clone)]
pub struct Aggregate<K, V> {
    m: std::collections::HashMap<K, V>,
    sum: V,
}

impl<K, V> Default for Aggregate<K, V>
where
    V: Default,
{
    fn default() -> Self {
        Self {
            m: Default::default(),
            sum: Default::default(),
        }
    }
}

impl<K, V> PartialEq for Aggregate<K, V>
where
    K: Eq + std::hash::Hash,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.m == other.m && self.sum == other.sum
    }
}

impl<K, V> Eq for Aggregate<K, V>
where
    K: Eq + std::hash::Hash,
    V: Eq,
{
}

impl<K, V> Aggregate<K, V> {
    pub fn sum(&self) -> V
    where
        V: Copy,
    {
        self.sum
    }

    pub fn is_empty(&self) -> bool {
        self.m.is_empty()
    }

    pub fn len(&self) -> usize {
        self.m.len()
    }

    pub fn add(&mut self, key: K, value: V)
    where
        K: Copy + Eq + std::hash::Hash,
        V: Copy + Default + std::ops::AddAssign,
    {
        *(self.m.entry(key).or_default()) += value;
        self.sum += value;
    }

    pub fn get(&self, key: K) -> Option<V>
    where
        K: Copy + Eq + std::hash::Hash,
        V: Copy,
    {
        self.m.get(&key).copied()
    }

    /// Iterates in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (K, V)> + '_
    where
        K: Copy,
        V: Copy,
    {
        self.m.iter().map(|(&k, &v)| (k, v))
    }
}

impl<K, V> FromIterator<(K, V)> for Aggregate<K, V>
where
    K: Copy + Eq + std::hash::Hash,
    V: Copy + Default + std::ops::AddAssign,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut agg = Aggregate::<K, V>::default();
        for (k, v) in iter {
            agg.add(k, v);
        }
        agg
    }
}

/// Sums expense amounts per category over the records dated within `window`.
///
/// Income records are ignored. Categories are grouped verbatim, so the empty
/// category is a group of its own. Zero amounts never create a group, which
/// means every value in the result is positive.
pub fn by_category<'a, I>(records: I, window: Window) -> Aggregate<&'a Category, Cents>
where
    I: IntoIterator<Item = &'a Record>,
{
    let agg = records
        .into_iter()
        .filter(|r| r.kind() == Kind::Expense && window.contains(r.date()))
        .filter(|r| r.amount().is_positive())
        .map(|r| (r.category(), r.amount()))
        .collect::<Aggregate<_, _>>();
    log::debug!(
        "aggregated {} expense categories in {} totaling {}",
        agg.len(),
        window,
        agg.sum()
    );
    agg
}

/// Sums amounts per kind over the records dated within `window`. Kinds with
/// no records are absent.
pub fn by_kind<'a, I>(records: I, window: Window) -> Aggregate<Kind, Cents>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|r| window.contains(r.date()))
        .map(|r| (r.kind(), r.amount()))
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::fixture;
    use rstest::rstest;

    use super::*;
    use crate::base::Recordlist;

    #[fixture]
    fn rl() -> Recordlist {
        r#"
            {"d":"2024-01-05","k":"expense","c":"Food","a":5000}
            {"d":"2024-01-20","k":"expense","c":"Food","a":5000}
            {"d":"2024-01-21","k":"income","c":"Salary","a":300000}
            {"d":"2024-02-01","k":"expense","c":"Food","a":9900}
            {"d":"2023-01-15","k":"expense","c":"Transport","a":1200}
        "#
        .parse()
        .unwrap()
    }

    fn collect(agg: &Aggregate<&Category, Cents>) -> Vec<(String, i64)> {
        let mut v = agg
            .iter()
            .map(|(k, v)| (k.str().to_string(), v.0))
            .collect::<Vec<_>>();
        v.sort();
        v
    }

    #[test]
    fn test_aggregate() {
        let mut agg = Aggregate::<&'static str, i32>::default();
        assert!(agg.is_empty());
        assert_eq!(agg.sum(), 0);

        agg.add("a", 10);
        agg.add("b", -100);
        assert!(!agg.is_empty());
        assert_eq!(agg.get("a").unwrap(), 10);
        assert_eq!(agg.get("b").unwrap(), -100);
        assert!(agg.get("c").is_none());
        assert_eq!(agg.sum(), -90);

        agg.add("a", -3);
        agg.add("c", 0);
        assert_eq!(agg.get("a").unwrap(), 7);
        assert_eq!(agg.get("c").unwrap(), 0);
        assert_eq!(agg.sum(), -93);

        let mut vec = agg.iter().collect::<Vec<_>>();
        vec.sort();
        assert_eq!(vec, vec![("a", 7), ("b", -100), ("c", 0)]);

        let agg2 = vec.into_iter().collect::<Aggregate<_, _>>();
        assert_eq!(agg, agg2);
    }

    #[rstest]
    #[case("2024-01", &[("Food", 10000)])]
    #[case("2024-02", &[("Food", 9900)])]
    #[case("2023-01", &[("Transport", 1200)])]
    #[case("2022-01", &[])]
    #[case("all", &[("Food", 19900), ("Transport", 1200)])]
    fn test_by_category(
        rl: Recordlist,
        #[case] window: Window,
        #[case] want: &[(&str, i64)],
    ) {
        let agg = by_category(rl.iter(), window);
        let want = want
            .iter()
            .map(|&(k, v)| (k.to_string(), v))
            .collect::<Vec<_>>();
        assert_eq!(collect(&agg), want);
        assert_eq!(agg.sum(), Cents(want.iter().map(|(_, v)| v).sum()));
    }

    #[test]
    fn test_by_category_excludes_income_and_other_months() {
        let rl: Recordlist = r#"
            {"d":"2024-01-10","k":"expense","c":"Food","a":100}
            {"d":"2024-01-11","k":"income","c":"Food","a":50}
            {"d":"2024-02-10","k":"expense","c":"Food","a":30}
        "#
        .parse()
        .unwrap();
        let agg = by_category(rl.iter(), "2024-01".parse().unwrap());
        assert_eq!(collect(&agg), vec![("Food".to_string(), 100)]);
        assert_eq!(agg.sum(), Cents(100));
    }

    #[test]
    fn test_totals_saturate() {
        let food = "Food".parse::<Category>().unwrap();
        let agg = [
            (&food, Cents(i64::MAX - 1)),
            (&food, Cents(5)),
            (&food, Cents(i64::MAX)),
        ]
        .into_iter()
        .collect::<Aggregate<_, _>>();
        assert_eq!(agg.get(&food), Some(Cents(i64::MAX)));
        assert_eq!(agg.sum(), Cents(i64::MAX));
    }

    #[test]
    fn test_by_category_at_max_amount() {
        let line = format!(
            r#"{{"d":"2024-01-10","k":"expense","c":"Food","a":{}}}"#,
            Record::MAX_AMOUNT.0
        );
        let rl = std::iter::repeat_n(line.as_str(), 3)
            .collect::<Vec<_>>()
            .join("\n")
            .parse::<Recordlist>()
            .unwrap();
        let agg = by_category(rl.iter(), Window::All);
        assert_eq!(
            collect(&agg),
            vec![("Food".to_string(), Record::MAX_AMOUNT.0 * 3)]
        );
    }

    #[test]
    fn test_by_category_empty_input() {
        let agg = by_category(std::iter::empty(), Window::All);
        assert!(agg.is_empty());
        assert_eq!(agg.sum(), Cents(0));
    }

    #[test]
    fn test_by_category_keeps_empty_category_separate() {
        let rl: Recordlist = r#"
            {"d":"2024-01-05","k":"expense","a":300}
            {"d":"2024-01-06","k":"expense","c":"","a":200}
            {"d":"2024-01-07","k":"expense","c":"Food","a":100}
            {"d":"2024-01-08","k":"expense","c":"food","a":50}
        "#
        .parse()
        .unwrap();
        let agg = by_category(rl.iter(), Window::All);
        assert_eq!(
            collect(&agg),
            vec![
                ("".to_string(), 500),
                ("Food".to_string(), 100),
                ("food".to_string(), 50),
            ]
        );
    }

    #[test]
    fn test_by_category_skips_zero_amounts() {
        let rl: Recordlist = r#"
            {"d":"2024-01-05","k":"expense","c":"Free","a":0}
            {"d":"2024-01-06","k":"expense","c":"Food","a":100}
        "#
        .parse()
        .unwrap();
        let agg = by_category(rl.iter(), Window::All);
        assert_eq!(collect(&agg), vec![("Food".to_string(), 100)]);
    }

    #[rstest]
    #[case("2024-01", Some(300000), Some(10000))]
    #[case("2024-02", None, Some(9900))]
    #[case("2022-01", None, None)]
    fn test_by_kind(
        rl: Recordlist,
        #[case] window: Window,
        #[case] income: Option<i64>,
        #[case] expense: Option<i64>,
    ) {
        let agg = by_kind(rl.iter(), window);
        assert_eq!(agg.get(Kind::Income), income.map(Cents));
        assert_eq!(agg.get(Kind::Expense), expense.map(Cents));
    }
}
