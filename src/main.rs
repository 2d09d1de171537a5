use tempo::{Delta, Field, Moment};

fn main() {
    let result = Moment::parse("2019-05-15 10:20:30", tempo::DEFAULT_LAYOUT);
    println!("{result:?}");

    if let Ok(day) = result {
        println!("{}", day.format("YYYY/MM/DD HH:mm:ss.z"));
        println!("{}", day.end_of(Field::Hour));
        println!("{}", day.shift(Delta { year: 1, ..Delta::default() }));
    }
}
