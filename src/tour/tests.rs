#![cfg(test)]

use super::interfaces::*;
use super::structs::*;

#[test]
fn test_vertex_literals() {
    let v1 = Vertex::new(1, 2);
    let v2 = Vertex { x: 1, ..Default::default() };
    let v3 = Vertex::default();
    let p = Box::new(Vertex { x: 1, y: 2 });

    assert_eq!(v1.x, 1);
    assert_eq!(format!("{v1} {v2} {v3} {p}"), "{1 2} {1 0} {0 0} {1 2}");
    assert_eq!(*p, v1, "A boxed vertex should compare by value.");
}

#[test]
fn test_identify_self() {
    let human = Human::from(String::from("John Smith"));
    let robot = Robot::from(4269);

    assert_eq!(human.identify_self(), "Hello, I am John Smith.");
    assert_eq!(robot.identifier().to_string(), "0X010-4269");
    assert_eq!(robot.identify_self(), "Beep Boop. I am 0X010-4269.");
}

#[test]
fn test_dynamic_dispatch() {
    let entities: Vec<Box<dyn SelfIdentifier>> = vec![
        Box::new(Human { name: String::from("John Smith") }),
        Box::new(Robot { serial_number: 4269 }),
        Box::new(Robot { serial_number: 7 }),
    ];

    assert_eq!(
        introduce_all(&entities),
        [
            "Hello, I am John Smith.",
            "Beep Boop. I am 0X010-4269.",
            "Beep Boop. I am 0X010-7.",
        ],
        "Each entity should answer with its own implementation, in order."
    );
    assert!(introduce_all(&[]).is_empty());
}
