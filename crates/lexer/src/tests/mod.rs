// Test module for lexer
//
// Unit tests for the cell lexer, organized by category.

mod symbol_tests;
