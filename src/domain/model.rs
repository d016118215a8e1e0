use crate::domain::ports::Speak;
use crate::utils::error::{LectureError, Result};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    pub name: String,
    pub breed: String,
}

impl Dog {
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            breed: breed.into(),
        }
    }

    pub fn bark(&self) -> String {
        format!("{} says Woof!", self.name)
    }
}

impl Speak for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> String {
        self.bark()
    }
}

/// Owner is public; the balance is only reachable through the accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankAccount {
    pub owner: String,
    balance: i64,
}

impl BankAccount {
    pub fn new(owner: impl Into<String>) -> Self {
        Self::with_balance(owner, 0)
    }

    pub fn with_balance(owner: impl Into<String>, balance: i64) -> Self {
        Self {
            owner: owner.into(),
            balance,
        }
    }

    /// Adds `amount` when positive, otherwise does nothing. A deposit that
    /// would overflow the balance is ignored too.
    pub fn deposit(&mut self, amount: i64) {
        if amount > 0 {
            if let Some(balance) = self.balance.checked_add(amount) {
                self.balance = balance;
            }
        }
    }

    /// Same as [`deposit`](Self::deposit) but reports rejected amounts.
    pub fn try_deposit(&mut self, amount: i64) -> Result<i64> {
        if amount <= 0 {
            tracing::debug!(owner = %self.owner, amount, "rejected deposit");
            return Err(LectureError::InvalidAmount { amount });
        }
        let Some(balance) = self.balance.checked_add(amount) else {
            tracing::debug!(owner = %self.owner, amount, "deposit overflows balance");
            return Err(LectureError::BalanceOverflow {
                balance: self.balance,
                amount,
            });
        };
        self.balance = balance;
        Ok(self.balance)
    }

    pub fn get_balance(&self) -> i64 {
        self.balance
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    pub name: String,
}

impl Animal {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Speak for Animal {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    pub name: String,
}

impl Cat {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Speak for Cat {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> String {
        format!("{} says Meow!", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dog_barks_with_its_name() {
        let dog = Dog::new("Buddy", "Golden Retriever");
        assert_eq!(dog.bark(), "Buddy says Woof!");
        assert_eq!(dog.speak(), dog.bark());
    }

    #[test]
    fn test_deposit_positive_amounts() {
        let mut acct = BankAccount::with_balance("Alice", 1000);
        acct.deposit(500);
        assert_eq!(acct.get_balance(), 1500);
        assert_eq!(acct.owner, "Alice");
    }

    #[test]
    fn test_deposit_ignores_non_positive_amounts() {
        let mut acct = BankAccount::with_balance("Alice", 1000);
        for amount in [0, -1, -500, i64::MIN] {
            acct.deposit(amount);
            assert_eq!(acct.get_balance(), 1000);
        }
    }

    #[test]
    fn test_try_deposit_rejects_non_positive_amounts() {
        let mut acct = BankAccount::new("Bob");
        assert_eq!(acct.get_balance(), 0);

        let err = acct.try_deposit(0).unwrap_err();
        assert!(matches!(err, LectureError::InvalidAmount { amount: 0 }));
        assert!(acct.try_deposit(-20).is_err());
        assert_eq!(acct.get_balance(), 0);

        assert_eq!(acct.try_deposit(25).unwrap(), 25);
        assert_eq!(acct.get_balance(), 25);
    }

    #[test]
    fn test_deposit_near_max_balance_is_ignored() {
        let mut acct = BankAccount::with_balance("Alice", i64::MAX - 10);
        acct.deposit(500);
        assert_eq!(acct.get_balance(), i64::MAX - 10);

        acct.deposit(10);
        assert_eq!(acct.get_balance(), i64::MAX);
    }

    #[test]
    fn test_try_deposit_reports_overflow() {
        let mut acct = BankAccount::with_balance("Alice", i64::MAX - 10);
        let err = acct.try_deposit(500).unwrap_err();
        assert!(matches!(
            err,
            LectureError::BalanceOverflow {
                balance,
                amount: 500
            } if balance == i64::MAX - 10
        ));
        assert_eq!(acct.get_balance(), i64::MAX - 10);
    }

    #[test]
    fn test_cat_overrides_default_sound() {
        assert_eq!(Animal::new("Generic").speak(), "Generic makes a sound");
        assert_eq!(Cat::new("Whiskers").speak(), "Whiskers says Meow!");
    }

    #[test]
    fn test_speakers_dispatch_dynamically() {
        let animals: Vec<Box<dyn Speak>> = vec![
            Box::new(Dog::new("Rex", "Bulldog")),
            Box::new(Cat::new("Whiskers")),
            Box::new(Animal::new("Nemo")),
        ];
        let lines: Vec<String> = animals.iter().map(|a| a.speak()).collect();
        assert_eq!(
            lines,
            vec!["Rex says Woof!", "Whiskers says Meow!", "Nemo makes a sound"]
        );
    }

    #[test]
    fn test_book_display() {
        let book = Book::new("1984", "George Orwell");
        assert_eq!(book.to_string(), "1984 by George Orwell");
    }
}
